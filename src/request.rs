use std::error::Error;
use std::fmt::{self, Display};
use std::sync::mpsc::Sender;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
}

impl Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            HttpMethod::Get => "GET",
        };
        write!(f, "{label}")
    }
}

impl From<HttpMethod> for reqwest::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => reqwest::Method::GET,
        }
    }
}

/// Result of one submit, handed from the network side to the display side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Body(Vec<u8>),
    Failed(String),
}

pub async fn fetch(client: &reqwest::Client, method: HttpMethod, url: &str) -> Outcome {
    match send(client, method, url).await {
        Ok(body) => {
            log::debug!("{method} {url} returned {} bytes", body.len());
            Outcome::Body(body)
        }
        Err(e) => {
            let message = describe(&e);
            log::warn!("{method} {url} failed: {message}");
            Outcome::Failed(message)
        }
    }
}

async fn send(
    client: &reqwest::Client,
    method: HttpMethod,
    url: &str,
) -> Result<Vec<u8>, reqwest::Error> {
    let response = client
        .request(method.into(), url)
        .send()
        .await?
        .error_for_status()?;
    let bytes = response.bytes().await?;
    Ok(bytes.to_vec())
}

/// Flattens an error and its causes into one line, skipping causes whose
/// text is already part of the message.
pub fn describe(err: &(dyn Error + 'static)) -> String {
    let mut message = err.to_string();
    let mut source = err.source();

    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }

    message
}

fn build_client(system_proxy: bool) -> Result<reqwest::Client, reqwest::Error> {
    let builder = reqwest::Client::builder();
    let builder = if system_proxy {
        builder
    } else {
        builder.no_proxy()
    };
    builder.build()
}

/// Runs [`fetch`] on a worker thread and posts the outcome back to the UI.
pub fn spawn_fetch(
    method: HttpMethod,
    url: String,
    system_proxy: bool,
    tx: Sender<Outcome>,
    ctx: egui::Context,
) {
    std::thread::spawn(move || {
        let outcome = match tokio::runtime::Runtime::new() {
            Ok(rt) => rt.block_on(async {
                match build_client(system_proxy) {
                    Ok(client) => fetch(&client, method, &url).await,
                    Err(e) => Outcome::Failed(describe(&e)),
                }
            }),
            Err(e) => Outcome::Failed(format!("Failed to start request runtime: {e}")),
        };

        let _ = tx.send(outcome);
        ctx.request_repaint();
    });
}
