/// Failures that stop the server from starting or serving.
#[derive(Debug, Clone, thiserror::Error)]
pub enum AppError {
    #[error("Configuratie ongeldig: {0}")]
    Config(String),

    #[error("Kan adres niet binden: {0}")]
    Bind(String),

    #[error("Serverfout: {0}")]
    Server(String),
}
