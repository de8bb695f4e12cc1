pub enum ApiPath {
    Static(&'static str),
    Dynamic(String),
}

impl ApiPath {
    pub fn as_str(&self) -> &str {
        match self {
            ApiPath::Static(s) => s,
            ApiPath::Dynamic(s) => s.as_str(),
        }
    }
}

pub const API_PREFIX: &str = "/api";

#[derive(Debug, Clone)]
pub enum BackendApiChat {
    Text,
    Multimodal,
}

impl BackendApiChat {
    pub fn path(&self) -> ApiPath {
        match self {
            BackendApiChat::Text => ApiPath::Static("/chat"),
            BackendApiChat::Multimodal => ApiPath::Static("/chat-multimodal"),
        }
    }
}

#[derive(Debug, Clone)]
pub enum BackendApiHistory {
    Clear,
    Get,
}

impl BackendApiHistory {
    /// `session_id` fills the path parameter of `Get`; `None` yields the
    /// router pattern.
    pub fn path(&self, session_id: Option<&str>) -> ApiPath {
        match self {
            BackendApiHistory::Clear => ApiPath::Static("/clear-history"),
            BackendApiHistory::Get => {
                let session_id = session_id.unwrap_or("{session_id}");
                ApiPath::Dynamic(format!("/history/{}", session_id))
            }
        }
    }
}

#[derive(Debug, Clone)]
pub enum BackendApiModel {
    List,
}

impl BackendApiModel {
    pub fn path(&self) -> ApiPath {
        match self {
            BackendApiModel::List => ApiPath::Static("/models"),
        }
    }
}

pub fn all_backend_api_paths() -> Vec<String> {
    let mut paths = vec![];
    for chat in [BackendApiChat::Text, BackendApiChat::Multimodal].iter() {
        paths.push(format!("{}{}", API_PREFIX, chat.path().as_str()));
    }
    for history in [BackendApiHistory::Clear, BackendApiHistory::Get].iter() {
        paths.push(format!("{}{}", API_PREFIX, history.path(None).as_str()));
    }
    for model in [BackendApiModel::List].iter() {
        paths.push(format!("{}{}", API_PREFIX, model.path().as_str()));
    }
    paths
}

pub fn print_all_backend_api_paths() {
    for path in all_backend_api_paths() {
        tracing::info!("route {}", path);
    }
}
