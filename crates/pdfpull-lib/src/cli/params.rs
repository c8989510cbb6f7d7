use crate::config::Config;
use crate::target::BatchRequest;

#[derive(Debug, Clone)]
pub struct FetchParams {
    pub app_config: Config,
    pub request: BatchRequest,
    pub skip_probe: bool,
    pub verify: bool,
}
