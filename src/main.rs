#[tokio::main]
async fn main() {
    hotel_events::run().await;
}
