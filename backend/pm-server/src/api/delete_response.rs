use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub success: bool,
    pub id: String,
}
