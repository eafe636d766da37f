#[derive(Debug, PartialEq, Clone)]
pub enum GenericError {
    TimeoutError,
    TransportError(String),
    MalformedResponse(String),
    RuntimeError(String),
}

impl GenericError {
    pub fn to_string(&self) -> String {
        match self {
            Self::TimeoutError => String::from("Call timed out"),
            Self::TransportError(s) => format!("Transport error: {}", s.clone()),
            Self::MalformedResponse(s) => format!("Malformed response: {}", s.clone()),
            Self::RuntimeError(s) => format!("Runtime Error: {}", s.clone()),
        }
    }
}
