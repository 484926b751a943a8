use std::str::FromStr;
use anyhow::{anyhow, Context};
use clap::{Args, Parser, Subcommand};
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

/// Admin view of the storefront orders
#[derive(Parser, Debug)]
#[command(name = "order-intake")]
#[command(about = "client cli used by storefront admins to inspect and manage orders", version, long_about = None
)]
struct Cli {
    #[arg(long, default_value = "http://localhost:8080", help = "Base url of the order intake server")]
    host: String,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// list every order, newest first
    List,
    /// submit an order on behalf of a customer
    #[command(arg_required_else_help = true)]
    Submit(SubmitArgs),
    /// remove every order
    Clear,
}

#[derive(Debug, Args, Serialize)]
struct SubmitArgs {
    #[arg(long)]
    name: String,
    #[arg(long)]
    phone: String,
    #[arg(long)]
    city: String,
    #[arg(long)]
    address: String,
    #[arg(long = "item", help = "Line item as NAME:QTY, repeatable.", value_name = "NAME:QTY", num_args = 1..)]
    items: Vec<LineItem>,
    #[arg(long, help = "Order total, sent exactly as typed.")]
    total: Number,
    #[arg(long, default_value = "cash")]
    payment: String,
}

#[derive(Debug, Clone, Serialize)]
struct LineItem {
    name: String,
    qty: u32,
}

impl FromStr for LineItem {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, qty) = s.rsplit_once(':').unwrap_or((s, "1"));
        if name.trim().is_empty() {
            return Err(format!("missing item name in {s}"));
        }
        let qty = qty.parse().map_err(|_| format!("invalid quantity in {s}"))?;
        Ok(Self { name: name.trim().to_string(), qty })
    }
}

#[derive(Debug, Deserialize)]
struct OrdersResponse {
    orders: Vec<Value>,
    total: usize,
}

#[derive(Debug, Deserialize)]
struct SubmitResponse {
    order: Value,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: String,
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    let args = Cli::parse();
    let url = format!("{}/{}", args.host.trim_end_matches('/'), "orders");
    let client = Client::new();

    match args.command {
        Commands::List => {
            let res = client.get(&url).send().await?;
            match res.status() {
                StatusCode::OK => {
                    let res = res.json::<OrdersResponse>().await.context("failed to decode orders")?;
                    println!("{} orders", res.total);
                    for order in res.orders {
                        println!(
                            "{} | {} | {} | {} | total={} | {}",
                            order["id"].as_str().unwrap_or("?"),
                            order["createdAt"].as_str().unwrap_or("?"),
                            order["name"].as_str().unwrap_or("?"),
                            order["phone"].as_str().unwrap_or("?"),
                            order["total"],
                            order["status"].as_str().unwrap_or("?"),
                        );
                    }
                },
                unexpected => return Err(failure(unexpected, res).await),
            }
        },
        Commands::Submit(order) => {
            println!("submitting order for {}", order.name);
            let res = client.post(&url).json(&order).send().await?;
            match res.status() {
                StatusCode::CREATED => {
                    let res = res.json::<SubmitResponse>().await.context("failed to decode order")?;
                    println!("order {} submitted", res.order["id"].as_str().unwrap_or("?"));
                },
                StatusCode::BAD_REQUEST => {
                    let res = res.json::<ErrorResponse>().await.context("failed to decode error")?;
                    println!("order rejected: {}", res.error);
                },
                unexpected => return Err(failure(unexpected, res).await),
            }
        },
        Commands::Clear => {
            let res = client.delete(&url).send().await?;
            match res.status() {
                StatusCode::OK => println!("all orders cleared"),
                unexpected => return Err(failure(unexpected, res).await),
            }
        },
    };
    Ok(())
}

async fn failure(status: StatusCode, res: reqwest::Response) -> anyhow::Error {
    let detail = res
        .json::<ErrorResponse>()
        .await
        .map(|e| e.error)
        .unwrap_or_default();
    anyhow!("got unexpected status code, {} {}", status, detail)
}
