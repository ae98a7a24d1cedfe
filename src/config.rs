#[derive(Debug, Clone)]
pub struct ConsoleConfig {
    pub title: String,
    pub inner_size: (f32, f32),
    pub default_url: String,
    pub placeholder: String,
    pub url_field_width: f32,
    /// Honour `HTTP_PROXY`/`HTTPS_PROXY` and the platform proxy settings.
    pub system_proxy: bool,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            title: "Robotics Use Case Console".to_string(),
            inner_size: (640.0, 480.0),
            default_url: "http://localhost:1026/v2/entities/my_robot".to_string(),
            placeholder: "Output area for result of HTTP request to be updated when you press submit\n\
                          (ideally highlightable/copy pastable)"
                .to_string(),
            url_field_width: 560.0,
            system_proxy: true,
        }
    }
}
