#[tokio::main]
async fn main() {
    if let Err(err) = housing_advisor::run().await {
        eprintln!("application error: {err}");
        std::process::exit(1);
    }
}
