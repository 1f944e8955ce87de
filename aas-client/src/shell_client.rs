//! Client for a single shell's REST interface
//!
//! Paths follow the AAS server layout:
//!
//! | operation | method | path |
//! |-----------|--------|------|
//! | shell | GET | `/aas` |
//! | submodels | GET | `/aas/submodels` |
//! | submodel | GET | `/aas/submodels/{idShort}/submodel` |
//! | elements | GET | `.../submodel/submodelElements` |
//! | element | GET, PUT, DELETE | `.../submodelElements/{path}` |
//! | value | GET, PUT | `.../submodelElements/{path}/value` |
//! | invoke | POST | `.../submodelElements/{path}/invoke` |

use crate::http::{
    HttpMethod, HttpTransport, SimpleHttpClient, evaluate_empty_response, evaluate_response,
};
use aas_core::{ApiResult, strings};
use aas_model::{
    AssetAdministrationShell, ElementContainer, OperationVariable, Submodel, SubmodelElement,
};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

const SHELL_PATH: &str = "aas";

/// Arguments of an operation invocation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvocationRequest {
    pub request_id: String,
    #[serde(default)]
    pub input_arguments: Vec<OperationVariable>,
    #[serde(default)]
    pub inoutput_arguments: Vec<OperationVariable>,
    /// Timeout in milliseconds
    pub timeout: u64,
}

impl InvocationRequest {
    pub fn new(request_id: impl Into<String>, timeout: u64) -> Self {
        Self {
            request_id: request_id.into(),
            input_arguments: Vec::new(),
            inoutput_arguments: Vec::new(),
            timeout,
        }
    }

    pub fn with_input(mut self, argument: impl Into<SubmodelElement>) -> Self {
        self.input_arguments.push(OperationVariable::new(argument));
        self
    }
}

/// Outcome of an operation invocation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvocationResponse {
    pub request_id: String,
    #[serde(default)]
    pub output_arguments: Vec<OperationVariable>,
    #[serde(default)]
    pub inoutput_arguments: Vec<OperationVariable>,
    #[serde(default)]
    pub execution_state: String,
}

impl InvocationResponse {
    /// Output argument by idShort
    pub fn output(&self, id_short: &str) -> Option<&SubmodelElement> {
        self.output_arguments
            .iter()
            .find(|v| v.id_short() == id_short)
            .map(|v| v.value.as_ref())
    }
}

/// Client for the shell served at a transport's endpoint
pub struct AssetAdministrationShellHttpClient<T: HttpTransport = SimpleHttpClient> {
    transport: T,
}

impl<T: HttpTransport> AssetAdministrationShellHttpClient<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub async fn retrieve_shell(&self) -> ApiResult<AssetAdministrationShell> {
        self.request(HttpMethod::Get, SHELL_PATH.to_string(), None).await
    }

    pub async fn retrieve_submodels(&self) -> ApiResult<Vec<Submodel>> {
        let path = format!("{}/submodels", SHELL_PATH);
        self.request(HttpMethod::Get, path, None).await
    }

    pub async fn retrieve_submodel(&self, submodel_id_short: &str) -> ApiResult<Submodel> {
        self.request(HttpMethod::Get, submodel_path(submodel_id_short), None).await
    }

    pub async fn retrieve_submodel_elements(
        &self,
        submodel_id_short: &str,
    ) -> ApiResult<ElementContainer> {
        self.request(HttpMethod::Get, elements_path(submodel_id_short), None).await
    }

    pub async fn retrieve_submodel_element(
        &self,
        submodel_id_short: &str,
        element_path: &str,
    ) -> ApiResult<SubmodelElement> {
        let path = element_path_of(submodel_id_short, element_path);
        self.request(HttpMethod::Get, path, None).await
    }

    pub async fn retrieve_submodel_element_value(
        &self,
        submodel_id_short: &str,
        element_path: &str,
    ) -> ApiResult<Value> {
        let path = format!("{}/value", element_path_of(submodel_id_short, element_path));
        self.request(HttpMethod::Get, path, None).await
    }

    pub async fn update_submodel_element_value(
        &self,
        submodel_id_short: &str,
        element_path: &str,
        value: Value,
    ) -> ApiResult<()> {
        let path = format!("{}/value", element_path_of(submodel_id_short, element_path));
        self.request_empty(HttpMethod::Put, path, Some(value)).await
    }

    /// Create the element below `parent_path` (empty for top level) or replace it
    pub async fn create_or_update_submodel_element(
        &self,
        submodel_id_short: &str,
        parent_path: &str,
        element: &SubmodelElement,
    ) -> ApiResult<SubmodelElement> {
        let body = match element.to_json() {
            Ok(body) => body,
            Err(err) => return ApiResult::from_error(&err),
        };
        let element_path = strings::join_path([parent_path, element.id_short()]);
        self.request(
            HttpMethod::Put,
            element_path_of(submodel_id_short, &element_path),
            Some(body),
        )
        .await
    }

    pub async fn delete_submodel_element(
        &self,
        submodel_id_short: &str,
        element_path: &str,
    ) -> ApiResult<()> {
        let path = element_path_of(submodel_id_short, element_path);
        self.request_empty(HttpMethod::Delete, path, None).await
    }

    pub async fn invoke_operation(
        &self,
        submodel_id_short: &str,
        operation_path: &str,
        request: &InvocationRequest,
    ) -> ApiResult<InvocationResponse> {
        let body = match serde_json::to_value(request) {
            Ok(body) => body,
            Err(err) => return ApiResult::from_error(&err.into()),
        };
        let path = format!("{}/invoke", element_path_of(submodel_id_short, operation_path));
        self.request(HttpMethod::Post, path, Some(body)).await
    }

    async fn request<R: DeserializeOwned>(
        &self,
        method: HttpMethod,
        path: String,
        body: Option<Value>,
    ) -> ApiResult<R> {
        match self.transport.send(method, path, body).await {
            Ok(response) => evaluate_response(&response),
            Err(err) => {
                log::warn!("{}", err);
                ApiResult::from_error(&err)
            }
        }
    }

    async fn request_empty(
        &self,
        method: HttpMethod,
        path: String,
        body: Option<Value>,
    ) -> ApiResult<()> {
        match self.transport.send(method, path, body).await {
            Ok(response) => evaluate_empty_response(&response),
            Err(err) => {
                log::warn!("{}", err);
                ApiResult::from_error(&err)
            }
        }
    }
}

fn submodel_path(submodel_id_short: &str) -> String {
    format!("{}/submodels/{}/submodel", SHELL_PATH, submodel_id_short)
}

fn elements_path(submodel_id_short: &str) -> String {
    format!("{}/submodelElements", submodel_path(submodel_id_short))
}

fn element_path_of(submodel_id_short: &str, element_path: &str) -> String {
    strings::join_path([elements_path(submodel_id_short).as_str(), element_path])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::{HttpResponse, MockHttpTransport};
    use aas_core::{AasError, DataType, ElementValue, Identifier, Message};
    use aas_model::Property;
    use serde_json::json;
    use std::time::Duration;
    use wiremock::matchers::{body_partial_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn expect(
        mock: &mut MockHttpTransport,
        expected_method: HttpMethod,
        expected_path: &'static str,
        response: HttpResponse,
    ) {
        mock.expect_send()
            .withf(move |method, path, _| *method == expected_method && path == expected_path)
            .times(1)
            .returning(move |_, _, _| Ok(response.clone()));
    }

    #[tokio::test]
    async fn test_retrieve_submodel_paths() {
        let submodel = Submodel::new("Nameplate", Identifier::iri("urn:sm:np"));
        let mut mock = MockHttpTransport::new();
        expect(
            &mut mock,
            HttpMethod::Get,
            "aas/submodels/Nameplate/submodel",
            HttpResponse::json(200, &serde_json::to_value(&submodel).unwrap()),
        );
        expect(
            &mut mock,
            HttpMethod::Get,
            "aas/submodels/Nameplate/submodel/submodelElements/Address/Street/value",
            HttpResponse::json(200, &json!("Main St")),
        );

        let client = AssetAdministrationShellHttpClient::new(mock);
        assert_eq!(client.retrieve_submodel("Nameplate").await.into_result().unwrap(), submodel);
        assert_eq!(
            client
                .retrieve_submodel_element_value("Nameplate", "/Address/Street/")
                .await
                .into_result()
                .unwrap(),
            json!("Main St")
        );
    }

    #[tokio::test]
    async fn test_update_and_delete() {
        let mut mock = MockHttpTransport::new();
        mock.expect_send()
            .withf(|method, path, body| {
                *method == HttpMethod::Put
                    && path == "aas/submodels/TechnicalData/submodel/submodelElements/MaxTemp/value"
                    && *body == Some(json!(85.5))
            })
            .times(1)
            .returning(|_, _, _| Ok(HttpResponse::new(200, "85.5")));
        let not_found = ApiResult::<()>::failure(Message::not_found("MaxTemp"));
        expect(
            &mut mock,
            HttpMethod::Delete,
            "aas/submodels/TechnicalData/submodel/submodelElements/MaxTemp",
            HttpResponse::json(404, &serde_json::to_value(not_found).unwrap()),
        );

        let client = AssetAdministrationShellHttpClient::new(mock);
        assert!(client
            .update_submodel_element_value("TechnicalData", "MaxTemp", json!(85.5))
            .await
            .is_success());
        let err = client
            .delete_submodel_element("TechnicalData", "MaxTemp")
            .await
            .ensure_success()
            .unwrap_err();
        assert!(matches!(err, AasError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_transport_error_becomes_failure() {
        let mut mock = MockHttpTransport::new();
        mock.expect_send()
            .returning(|_, _, _| Err(AasError::Http("connection refused".into())));

        let client = AssetAdministrationShellHttpClient::new(mock);
        let result = client.retrieve_shell().await;
        assert!(!result.is_success());
        assert!(matches!(result.into_result(), Err(AasError::Http(_))));
    }

    #[tokio::test]
    async fn test_create_and_invoke_over_http() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/aas/submodels/TechnicalData/submodel/submodelElements/Limits/MaxTemp"))
            .and(body_partial_json(
                json!({"idShort": "MaxTemp", "modelType": {"name": "Property"}}),
            ))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({
                "idShort": "MaxTemp",
                "modelType": {"name": "Property"},
                "valueType": "double",
                "value": "90"
            })))
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/aas/submodels/TechnicalData/submodel/submodelElements/Calibrate/invoke"))
            .and(body_partial_json(json!({"requestId": "r-1", "timeout": 1000})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "requestId": "r-1",
                "executionState": "Completed",
                "outputArguments": [{
                    "modelType": {"name": "OperationVariable"},
                    "value": {
                        "idShort": "Done",
                        "modelType": {"name": "Property"},
                        "valueType": "boolean",
                        "value": true
                    }
                }]
            })))
            .mount(&server)
            .await;

        let transport = SimpleHttpClient::new(&server.uri(), Duration::from_secs(5), None).unwrap();
        let client = AssetAdministrationShellHttpClient::new(transport);

        let element = Property::new("MaxTemp", DataType::Double).with_value(90.0).into();
        let created = client
            .create_or_update_submodel_element("TechnicalData", "Limits", &element)
            .await
            .into_result()
            .unwrap();
        assert_eq!(
            created.as_property().unwrap().value,
            Some(ElementValue::Decimal(90.0))
        );

        let request = InvocationRequest::new("r-1", 1000)
            .with_input(Property::new("Offset", DataType::Double));
        let response = client
            .invoke_operation("TechnicalData", "Calibrate", &request)
            .await
            .into_result()
            .unwrap();
        assert_eq!(response.execution_state, "Completed");
        assert_eq!(
            response.output("Done").unwrap().as_property().unwrap().value,
            Some(ElementValue::Boolean(true))
        );
    }
}
