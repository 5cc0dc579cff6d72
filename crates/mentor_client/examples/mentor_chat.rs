use mentor_client::{MentorApi, config::Config, http_client::ReqwestMentorClient};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Example: expects MENTOR_API_KEY in env
    let cfg = match Config::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("config error: {}", e);
            return Ok(());
        }
    };
    let client = ReqwestMentorClient::from_config(&cfg);
    let reply = client.generate_reply("I had a long week and feel drained.").await?;
    println!("Mentor: {}", reply);
    Ok(())
}
