use crate::agent::{ ChatError, DroneEduAgent };
use crate::cli::Args;
use crate::leads::LeadStore;
use crate::models::chat::ChatRequest;
use crate::models::knowledge::AddDocumentRequest;
use crate::models::lead::LeadRequest;
use crate::rag::{ KnowledgeBase, KnowledgeError };
use std::error::Error;
use std::net::SocketAddr;
use std::sync::Arc;
use axum::{
    extract::{ rejection::JsonRejection, State },
    http::StatusCode,
    response::{ IntoResponse, Response },
    routing::{ get, post },
    Json,
    Router,
};
use serde_json::json;
use tower_http::cors::{ Any, CorsLayer };
use log::{ error, info, warn };

pub const API_VERSION: &str = "1.0.0";

#[derive(Clone)]
pub struct AppState {
    pub agent: Arc<DroneEduAgent>,
    pub knowledge: Arc<KnowledgeBase>,
    pub leads: Arc<dyn LeadStore>,
}

fn error_response(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "error": message }))).into_response()
}

pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any);

    Router::new()
        .route("/api", get(api_info_handler))
        .route("/api/chat", post(chat_handler))
        .route("/api/leads", post(leads_handler))
        .route("/api/rag", post(rag_add_handler).get(rag_list_handler))
        .layer(cors)
        .with_state(state)
}

pub async fn start_http_server(
    args: &Args,
    state: AppState
) -> Result<(), Box<dyn Error + Send + Sync>> {
    let addr = args.server_addr.parse::<SocketAddr>()?;
    let app = router(state);

    match (args.enable_tls, &args.tls_cert_path, &args.tls_key_path) {
        (true, Some(cert_path), Some(key_path)) => {
            let tls_config = axum_server::tls_rustls::RustlsConfig::from_pem_file(
                cert_path,
                key_path
            ).await?;
            info!("Starting HTTPS API server on: https://{}", addr);
            axum_server::bind_rustls(addr, tls_config).serve(app.into_make_service()).await?;
        }
        (true, _, _) => {
            return Err("TLS enabled but --tls-cert-path and --tls-key-path are not both set".into());
        }
        _ => {
            let listener = tokio::net::TcpListener::bind(addr).await?;
            info!("Starting HTTP API server on: http://{}", addr);
            axum::serve(listener, app.into_make_service()).await?;
        }
    }

    Ok(())
}

async fn api_info_handler() -> impl IntoResponse {
    Json(
        json!({
            "message": "DroneEdu Expert API",
            "version": API_VERSION,
            "endpoints": {
                "POST /api/chat": "Main chat endpoint",
                "POST /api/leads": "Save lead information",
                "POST /api/rag": "Add documents to RAG",
                "GET /api/rag": "List RAG documents"
            }
        })
    )
}

async fn chat_handler(
    State(state): State<AppState>,
    payload: Result<Json<ChatRequest>, JsonRejection>
) -> Response {
    let Json(request) = match payload {
        Ok(body) => body,
        Err(rejection) => {
            warn!("Rejected chat request: {}", rejection.body_text());
            return error_response(StatusCode::BAD_REQUEST, "Invalid request body");
        }
    };

    match state.agent.process_chat(&request).await {
        Ok(response) => Json(response).into_response(),
        Err(ChatError::EmptyMessage) => {
            error_response(StatusCode::BAD_REQUEST, &ChatError::EmptyMessage.to_string())
        }
    }
}

async fn leads_handler(
    State(state): State<AppState>,
    payload: Result<Json<LeadRequest>, JsonRejection>
) -> Response {
    let lead = match payload.ok().and_then(|Json(req)| req.into_lead()) {
        Some(lead) => lead,
        None => {
            return error_response(
                StatusCode::BAD_REQUEST,
                "First name, last name, and email are required"
            );
        }
    };

    match state.leads.insert(lead).await {
        Ok(lead_id) =>
            Json(
                json!({
                    "success": true,
                    "message": "Thank you! A DroneCareerPro expert will contact you soon.",
                    "leadId": lead_id
                })
            ).into_response(),
        Err(e) => {
            error!("Error inserting lead: {}", e);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "Failed to save contact information")
        }
    }
}

async fn rag_add_handler(
    State(state): State<AppState>,
    payload: Result<Json<AddDocumentRequest>, JsonRejection>
) -> Response {
    let Ok(Json(req)) = payload else {
        return error_response(StatusCode::BAD_REQUEST, "Source and content are required");
    };
    let source = req.source.unwrap_or_default();
    let content = req.content.unwrap_or_default();

    match state.knowledge.add_document(&source, &content, req.metadata).await {
        Ok(document_id) => Json(json!({ "success": true, "documentId": document_id })).into_response(),
        Err(KnowledgeError::MissingField(_)) => {
            error_response(StatusCode::BAD_REQUEST, "Source and content are required")
        }
        Err(e) => {
            error!("Error inserting knowledge document: {}", e);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "Failed to add document")
        }
    }
}

async fn rag_list_handler(State(state): State<AppState>) -> Response {
    match state.knowledge.list_documents().await {
        Ok(documents) => {
            let count = documents.len();
            Json(json!({ "documents": documents, "count": count })).into_response()
        }
        Err(e) => {
            error!("Error fetching knowledge documents: {}", e);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "Failed to fetch documents")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::prompt::PromptConfig;
    use crate::test_support::{
        MockChatClient,
        MockEmbeddingClient,
        MockKnowledgeSource,
        MockLeadStore,
        MockVectorIndex,
    };
    use axum::body::{ to_bytes, Body };
    use axum::http::{ header, Method, Request };
    use serde_json::Value as JsonValue;
    use tower::ServiceExt;

    struct Harness {
        chat: Arc<MockChatClient>,
        knowledge: Arc<MockKnowledgeSource>,
        index: Arc<MockVectorIndex>,
        leads: Arc<MockLeadStore>,
    }

    impl Harness {
        fn new(chat: MockChatClient, index: MockVectorIndex, leads: MockLeadStore) -> Self {
            Self {
                chat: Arc::new(chat),
                knowledge: Arc::new(MockKnowledgeSource::returning(Vec::new())),
                index: Arc::new(index),
                leads: Arc::new(leads),
            }
        }

        fn healthy() -> Self {
            Self::new(
                MockChatClient::replying("✅ A RePL lets you fly commercially."),
                MockVectorIndex::with_hits(Vec::new()),
                MockLeadStore::accepting()
            )
        }

        fn router(&self) -> Router {
            let agent = DroneEduAgent::new(self.chat.clone(), Arc::new(PromptConfig::default()))
                .with_knowledge(self.knowledge.clone());
            let knowledge = KnowledgeBase::new(
                Arc::new(MockEmbeddingClient::returning(vec![0.1, 0.2])),
                self.index.clone()
            );
            router(AppState {
                agent: Arc::new(agent),
                knowledge: Arc::new(knowledge),
                leads: self.leads.clone(),
            })
        }
    }

    async fn send(app: Router, method: Method, uri: &str, body: &str) -> (StatusCode, JsonValue) {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn chat_returns_model_answer() {
        let harness = Harness::healthy();
        let (status, body) = send(
            harness.router(),
            Method::POST,
            "/api/chat",
            r#"{"message":"What is a RePL?","sessionId":"s-1"}"#
        ).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["response"], "✅ A RePL lets you fly commercially.");
        assert_eq!(body["sessionId"], "s-1");
        assert_eq!(body["contextUsed"], false);
        assert_eq!(body["sources"], json!([]));
    }

    #[tokio::test]
    async fn chat_with_failing_model_still_answers() {
        let harness = Harness::new(
            MockChatClient::failing("rate limited"),
            MockVectorIndex::with_hits(Vec::new()),
            MockLeadStore::accepting()
        );
        let (status, body) = send(
            harness.router(),
            Method::POST,
            "/api/chat",
            r#"{"message":"What is a RePL?"}"#
        ).await;

        assert_eq!(status, StatusCode::OK);
        let text = body["response"].as_str().unwrap();
        assert!(text.contains("RePL"));
        assert!(text.contains("https://www.casa.gov.au/drones"));
        assert!(body["sessionId"].as_str().unwrap().starts_with("session_"));
    }

    #[tokio::test]
    async fn empty_chat_message_is_rejected_before_any_call() {
        let harness = Harness::healthy();
        let (status, body) = send(harness.router(), Method::POST, "/api/chat", r#"{"message":""}"#).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Message is required");
        assert_eq!(harness.chat.calls(), 0);
        assert_eq!(harness.knowledge.calls(), 0);
    }

    #[tokio::test]
    async fn malformed_chat_body_is_rejected() {
        let harness = Harness::healthy();
        for body in ["not json", r#"{"message": 42}"#] {
            let (status, reply) = send(harness.router(), Method::POST, "/api/chat", body).await;
            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert!(reply["error"].is_string());
        }
        assert_eq!(harness.chat.calls(), 0);
    }

    #[tokio::test]
    async fn lead_is_stored() {
        let harness = Harness::healthy();
        let (status, body) = send(
            harness.router(),
            Method::POST,
            "/api/leads",
            r#"{"firstName":"Ana","lastName":"Silva","email":"ana@example.com","phone":"0400 000 000"}"#
        ).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["leadId"], "lead-1");
        let stored = harness.leads.stored();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].phone.as_deref(), Some("0400 000 000"));
    }

    #[tokio::test]
    async fn lead_without_email_is_rejected() {
        let harness = Harness::healthy();
        let (status, body) = send(
            harness.router(),
            Method::POST,
            "/api/leads",
            r#"{"firstName":"Ana","lastName":"Silva"}"#
        ).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "First name, last name, and email are required");
        assert!(harness.leads.stored().is_empty());
    }

    #[tokio::test]
    async fn lead_store_failure_is_a_server_error() {
        let harness = Harness::new(
            MockChatClient::replying("ok"),
            MockVectorIndex::with_hits(Vec::new()),
            MockLeadStore::failing()
        );
        let (status, body) = send(
            harness.router(),
            Method::POST,
            "/api/leads",
            r#"{"firstName":"Ana","lastName":"Silva","email":"ana@example.com"}"#
        ).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "Failed to save contact information");
    }

    #[tokio::test]
    async fn documents_can_be_added_and_listed() {
        let harness = Harness::healthy();
        let (status, body) = send(
            harness.router(),
            Method::POST,
            "/api/rag",
            r#"{"source":"casa-faq","content":"Fly below 120 metres.","metadata":{"topic":"safety"}}"#
        ).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["documentId"], "doc-1");

        let (status, body) = send(harness.router(), Method::GET, "/api/rag", "").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["count"], 1);
        assert_eq!(body["documents"][0]["source"], "casa-faq");
        assert_eq!(body["documents"][0]["metadata"]["topic"], "safety");
    }

    #[tokio::test]
    async fn document_without_content_is_rejected() {
        let harness = Harness::healthy();
        let (status, body) = send(
            harness.router(),
            Method::POST,
            "/api/rag",
            r#"{"source":"casa-faq"}"#
        ).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Source and content are required");
        assert!(harness.index.inserted().is_empty());
    }

    #[tokio::test]
    async fn index_outage_is_a_server_error() {
        let harness = Harness::new(
            MockChatClient::replying("ok"),
            MockVectorIndex::failing(),
            MockLeadStore::accepting()
        );
        let (status, _) = send(
            harness.router(),
            Method::POST,
            "/api/rag",
            r#"{"source":"a","content":"b"}"#
        ).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);

        let (status, body) = send(harness.router(), Method::GET, "/api/rag", "").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "Failed to fetch documents");
    }

    #[tokio::test]
    async fn api_descriptor_lists_endpoints() {
        let harness = Harness::healthy();
        let (status, body) = send(harness.router(), Method::GET, "/api", "").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["version"], API_VERSION);
        assert!(body["endpoints"]["POST /api/chat"].is_string());
    }
}
