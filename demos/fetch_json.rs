use futures_util::StreamExt as _;
use reststream::RestCaller;
use snafu::prelude::*;

#[snafu::report]
#[tokio::main]
pub async fn main() -> Result<(), snafu::Whatever> {
    let url = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "https://api.nasa.gov/planetary/apod?api_key=DEMO_KEY".to_string());

    let caller = RestCaller::with_default_transport();

    let mut stream = caller
        .get(url.as_str())
        .whatever_context("Failed to parse the URL")?;

    match stream.next().await {
        Some(object) => {
            let object = object.whatever_context("Call failed")?;
            for (key, value) in &object {
                println!("{key}: {value}");
            }
        }
        None => println!("response carried no body"),
    }

    Ok(())
}
