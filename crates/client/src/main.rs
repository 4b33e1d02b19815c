use anyhow::{Context, Result, bail};
use capin_membership_client::{
    service::{spawn_login, spawn_registration},
    state::AppState,
};
use dotenv::dotenv;
use shared::{
    config::Config,
    domain::{
        form::{FormEvent, FormField, FormState, reduce},
        request::{LoginRequest, UserType},
        response::{LoginOutcome, RegistrationOutcome},
    },
    utils::init_logger,
};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    init_logger();

    let config = Config::init().context("Failed to load configuration")?;

    let state = AppState::new(&config).context("Failed to create AppState")?;

    let args: Vec<String> = std::env::args().skip(1).collect();

    match args.first().map(String::as_str) {
        Some("login") => {
            let mobile_no = args.get(1).cloned().unwrap_or_default();
            run_login(&state, mobile_no).await;
        }
        Some("register") => {
            run_registration(&state, &args[1..]).await;
        }
        _ => bail!(
            "usage: capin_membership_client login <mobile> | register <sponsor_id> <password> <member_name> <mobile> [email] [sponsor_name]"
        ),
    }

    Ok(())
}

async fn run_login(state: &AppState, mobile_no: String) {
    let request = LoginRequest {
        user_type: UserType::User,
        mobile_no,
    };

    let handle = spawn_login(state.di_container.login_service.clone(), request);

    match handle.join().await {
        Some(LoginOutcome::NavigatedToHome) => info!("Login complete"),
        Some(outcome) => info!("Login did not complete: {outcome:?}"),
        None => info!("Login cancelled"),
    }
}

async fn run_registration(state: &AppState, args: &[String]) {
    // Drive the same reducer a screen would: each argument lands as a
    // field edit before the submit.
    let fields = [
        FormField::SponsorId,
        FormField::Password,
        FormField::MemberName,
        FormField::Mobile,
        FormField::Email,
        FormField::SponsorName,
    ];

    let mut form_state = FormState::default();
    for (field, value) in fields.iter().zip(args) {
        form_state = reduce(form_state, FormEvent::FieldChanged(*field, value.clone()));
    }

    form_state = reduce(form_state, FormEvent::SubmissionStarted);

    let handle = spawn_registration(
        state.di_container.registration_service.clone(),
        form_state.form.clone(),
    );
    let outcome = handle.join().await;

    form_state = match &outcome {
        Some(RegistrationOutcome::NavigatedToSignIn) => {
            info!("Registration complete");
            reduce(form_state, FormEvent::SubmissionSucceeded)
        }
        Some(RegistrationOutcome::Invalid(errors)) => {
            reduce(form_state, FormEvent::ValidationFailed(errors.clone()))
        }
        Some(outcome) => {
            info!("Registration did not complete: {outcome:?}");
            reduce(form_state, FormEvent::SubmissionFailed)
        }
        None => {
            info!("Registration cancelled");
            reduce(form_state, FormEvent::SubmissionFailed)
        }
    };

    for (field, message) in &form_state.errors {
        println!("{field}: {message}");
    }
}
