macro_rules! load_test_json {
    ($filename:literal) => {{
        let mut path = ::std::path::PathBuf::from(::std::env!("CARGO_MANIFEST_DIR"));
        path.push("test_resources");
        path.push($filename);
        let file = match ::std::fs::OpenOptions::new().read(true).open(path) {
            Err(err) => {
                println!("couldn't open test resource file `{}`", $filename);
                panic!("{:?}", err);
            }
            Ok(file) => file,
        };
        match ::serde_json::from_reader(file) {
            Err(err) => {
                println!(
                    "couldn't parse json from test resource file `{}`",
                    $filename
                );
                panic!("{:?}", err);
            }
            Ok(v) => v,
        }
    }};
}

use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::client::{Client, ClientOptions};

pub const TEST_API_KEY: &str = "E84C8EF965448E02C469BB3228D46311";

/// Client that sends every request to `server`
pub fn test_client(server: &MockServer) -> Client {
    ClientOptions::new()
        .api_key(TEST_API_KEY)
        .base_url(server.uri())
        .build()
        .unwrap()
}

/// Serve `body` as json for every GET to `endpoint`
pub async fn serve_json(server: &MockServer, endpoint: &str, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path(endpoint))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}
