use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP API
    Serve {
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        #[arg(short, long, default_value = "8000")]
        port: u16,

        /// Bind to 0.0.0.0 instead of --host, exposing the server on all network interfaces
        #[arg(long)]
        public: bool,
    },

    /// Ask a single question against a context and print the answer
    Chat {
        #[arg(short, long)]
        query: String,

        #[arg(short, long)]
        context: String,

        /// Mistral API key
        #[arg(long, env = "MISTRAL_API_KEY", default_value = "", hide_env_values = true)]
        api_key: String,
    },

    /// List supported models
    Models,
}
