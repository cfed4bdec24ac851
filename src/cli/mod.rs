use clap::Parser;
use url::Url;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    // --- Server Args ---
    /// Host address and port for the HTTP API to listen on.
    #[arg(long, env = "SERVER_ADDR", default_value = "127.0.0.1:4000")]
    pub server_addr: String,

    /// Optional path to the TLS certificate file (PEM format). Requires --tls-key-path.
    #[arg(long, env = "TLS_CERT_PATH")]
    pub tls_cert_path: Option<String>,

    /// Optional path to the TLS private key file (PEM format). Requires --tls-cert-path.
    #[arg(long, env = "TLS_KEY_PATH")]
    pub tls_key_path: Option<String>,

    #[arg(long, env = "ENABLE_TLS", default_value = "false")]
    pub enable_tls: bool,

    // --- Chat LLM Provider Args ---
    /// Type of LLM provider for chat completion (openai, ollama)
    #[arg(long, env = "CHAT_LLM_TYPE", default_value = "openai")]
    pub chat_llm_type: String,

    /// Base URL for the Chat LLM provider API (e.g., https://api.openai.com)
    #[arg(long, env = "CHAT_BASE_URL")] // No default, let adapters handle defaults if None
    pub chat_base_url: Option<String>,

    /// API Key for the Chat LLM provider
    #[arg(long, env = "CHAT_API_KEY", default_value = "")]
    pub chat_api_key: String,

    /// Model name for chat completion (e.g., gpt-4o-mini, llama3)
    #[arg(long, env = "CHAT_MODEL")]
    pub chat_model: Option<String>,

    /// Sampling temperature sent with every completion request.
    #[arg(long, env = "CHAT_TEMPERATURE", default_value = "0.7")]
    pub chat_temperature: f32,

    /// Upper bound on generated tokens per completion.
    #[arg(long, env = "CHAT_MAX_TOKENS", default_value = "1000")]
    pub chat_max_tokens: u32,

    // --- Embedding LLM Provider Args ---
    /// Type of LLM provider for text embedding (gemini, openai, ollama)
    #[arg(long, env = "EMBEDDING_LLM_TYPE", default_value = "gemini")]
    pub embedding_llm_type: String,

    /// Base URL for the Embedding LLM provider API
    #[arg(long, env = "EMBEDDING_BASE_URL")]
    pub embedding_base_url: Option<String>,

    /// API Key for the Embedding LLM provider
    #[arg(long, env = "EMBEDDING_API_KEY", default_value = "")]
    pub embedding_api_key: String,

    /// Model name for text embedding (e.g., text-embedding-004, nomic-embed-text)
    #[arg(long, env = "EMBEDDING_MODEL")]
    pub embedding_model: Option<String>,

    // --- Knowledge Base Args ---
    /// Qdrant URL holding the knowledge base documents.
    #[arg(long, env = "VECTOR_HOST", default_value = "http://localhost:6334")]
    pub vector_host: String,

    /// Optional API key for the Qdrant instance.
    #[arg(long, env = "VECTOR_SECRET")]
    pub vector_secret: Option<String>,

    /// Collection name for knowledge base documents.
    #[arg(long, env = "VECTOR_COLLECTION", default_value = "rag_docs")]
    pub vector_collection: String,

    /// Vector dimension size
    #[arg(long, env = "VECTOR_DIMENSION", default_value = "768")]
    pub dimension: usize,

    /// Minimum cosine similarity for a document to be used as context (0.0 to 1.0).
    #[arg(long, env = "MATCH_THRESHOLD", default_value = "0.3")]
    pub match_threshold: f32,

    /// Maximum number of knowledge base documents per question.
    #[arg(long, env = "MATCH_COUNT", default_value = "5")]
    pub match_count: usize,

    // --- Context Args ---
    /// Which context providers feed the prompt (knowledge, live, both)
    #[arg(long, env = "CONTEXT_MODE", default_value = "both")]
    pub context_mode: String,

    /// Timeout in seconds for each live page fetch.
    #[arg(long, env = "LIVE_FETCH_TIMEOUT", default_value = "10")]
    pub live_fetch_timeout: u64,

    /// Regulator page scraped for live context.
    #[arg(long, env = "CASA_URL", default_value = "https://www.casa.gov.au/drones")]
    pub casa_url: Url,

    /// Training provider page scraped for live context.
    #[arg(long, env = "GDRONE_URL", default_value = "https://gdronesolutions.com.au")]
    pub gdrone_url: Url,

    /// Number of prior conversation turns included in the prompt.
    #[arg(long, env = "HISTORY_WINDOW", default_value = "5")]
    pub history_window: usize,

    /// Optional JSON file overriding the persona and prompt headings.
    #[arg(long, env = "PROMPTS_PATH")]
    pub prompts_path: Option<String>,

    // --- Lead Store Args ---
    /// Redis URL where captured leads are stored.
    #[arg(long, env = "LEADS_REDIS_URL", default_value = "redis://127.0.0.1:6379")]
    pub leads_redis_url: String,

    /// Prefix for Redis lead keys.
    #[arg(long, env = "LEADS_KEY_PREFIX", default_value = "lead:")]
    pub leads_key_prefix: String,
}
