use axum::http::{StatusCode, header};
use axum::response::IntoResponse;
use axum::{Router, routing::any};
use clap::Parser;

/// Imitates a Radicale origin and the edge in front of it.
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
struct Args {
    #[arg(short, long)]
    port: u16,
}

async fn calendar() -> impl IntoResponse {
    "BEGIN:VCALENDAR\r\nEND:VCALENDAR\r\n"
}

async fn password_required() -> impl IntoResponse {
    (
        StatusCode::UNAUTHORIZED,
        [
            (header::WWW_AUTHENTICATE, "Basic realm=\"Radicale - Password Required\""),
            (header::SERVER, "Radicale/3.2"),
        ],
        "Access to the requested resource forbidden.",
    )
}

async fn missing() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        [(header::SERVER, "Radicale/3.2")],
        "The requested resource could not be found.",
    )
}

async fn tunnel_down() -> impl IntoResponse {
    StatusCode::from_u16(530).unwrap_or(StatusCode::BAD_GATEWAY)
}

fn router() -> Router {
    Router::new()
        .route("/", any(calendar))
        .route("/calendar", any(password_required))
        .route("/missing", any(missing))
        .route("/tunnel-down", any(tunnel_down))
}

#[tokio::main]
async fn main() {
    let args: Args = Args::parse();
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", args.port))
        .await
        .unwrap();
    println!("Dummy origin listening on port {}", args.port);
    axum::serve(listener, router()).await.unwrap();
}
