#[tokio::main]
async fn main() {
    if let Err(e) = clinic_portal_lib::run().await {
        eprintln!("clinic-portal: {e}");
        std::process::exit(1);
    }
}
