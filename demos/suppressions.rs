pub fn main() -> mailtrap::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::new().default_filter_or("mailtrap")).init();

    let client = mailtrap::ClientConfig::from_env()?.to_client()?;
    let suppressions = client.suppressions_api()?.suppressions();

    let email = std::env::args().nth(1);
    for suppression in suppressions.get_list(email.as_deref())? {
        println!(
            "{} {:?} since {}",
            suppression.email, suppression.suppression_type, suppression.created_at
        );
    }

    // Pass a suppression id as the second argument to lift it.
    if let Some(id) = std::env::args().nth(2) {
        let deleted = suppressions.delete(&id)?;
        println!("Deleted suppression {}", deleted.id);
    }

    Ok(())
}
