use futures_util::StreamExt as _;
use reststream::{CallRequest, RestCaller};
use serde::Deserialize;
use snafu::prelude::*;

#[derive(Debug, Deserialize)]
struct Apod {
    title: String,
    explanation: String,
    copyright: Option<String>,
}

#[snafu::report]
#[tokio::main]
pub async fn main() -> Result<(), snafu::Whatever> {
    let request = CallRequest::builder()
        .url("https://api.nasa.gov/planetary/apod?api_key=DEMO_KEY")
        .whatever_context("Failed to parse the URL")?
        .build()
        .into_http();

    let caller = RestCaller::with_default_transport();

    let response = caller
        .call_typed::<Apod>(request)
        .next()
        .await
        .whatever_context("Stream ended without an outcome")?
        .whatever_context("Call failed")?;

    println!("status: {}", response.head.status);
    match response.value {
        Some(apod) => {
            println!("{}", apod.title);
            println!("{}", apod.explanation);
            if let Some(copyright) = apod.copyright {
                println!("(c) {copyright}");
            }
        }
        None => println!("response carried no body"),
    }

    Ok(())
}
