use eyre::Report;

#[tokio::main]
async fn main() -> Result<(), Report> {
    pointbank::run().await
}
