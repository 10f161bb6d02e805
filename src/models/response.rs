use serde::{Deserialize, Serialize};

/// 网关统一响应格式：{ "result": ... }
/// result 缺失时按 None 处理，列表调用方降级为空列表
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    pub result: Option<T>,
}
