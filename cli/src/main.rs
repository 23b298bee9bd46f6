//! chainweb3: probe an Ethereum JSON-RPC endpoint or fire raw calls
//! at it.

use std::process;
use std::sync::Arc;
use std::time::Instant;

use serde_json::Value;
use tracing_subscriber::EnvFilter;

use chainweb3_api::Web3;
use chainweb3_core::dto::SyncState;
use chainweb3_core::{Provider, RawResult};
use chainweb3_http::{HttpProvider, HttpProviderConfig};
use chainweb3_ipc::IpcProvider;

#[tokio::main]
async fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let command = args.first().map(String::as_str).unwrap_or("help");

    match command {
        "probe" => cmd_probe(&args[1..]).await,
        "call" => cmd_call(&args[1..]).await,
        "version" => println!("chainweb3 {}", env!("CARGO_PKG_VERSION")),
        "help" | "--help" | "-h" => print_usage(),
        other => {
            eprintln!("unknown command: {other}");
            print_usage();
            process::exit(1);
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn print_usage() {
    println!("chainweb3 - JSON-RPC endpoint tool");
    println!();
    println!("USAGE:");
    println!("  chainweb3 <command> [options]");
    println!();
    println!("COMMANDS:");
    println!("  probe      Connect and print node identity, head block and sync state");
    println!("  call       Send one raw JSON-RPC call and print the result");
    println!("  version    Print the version");
    println!("  help       Show this help");
    println!();
    println!("OPTIONS:");
    println!("  --addr <host:port>   HTTP endpoint (default: 127.0.0.1:8545)");
    println!("  --secure             Use https instead of http");
    println!("  --ipc <path>         Talk to a Unix socket instead of HTTP");
    println!("  --timeout <secs>     Request timeout in seconds (default: 10)");
    println!("  --method <name>      Method for `call`, e.g. eth_blockNumber");
    println!("  --params <json>      Positional params for `call`, e.g. '[\"0xabc\",\"latest\"]'");
}

fn parse_flag(args: &[String], name: &str) -> Option<String> {
    args.iter()
        .position(|a| a == name)
        .and_then(|i| args.get(i + 1))
        .cloned()
}

fn has_flag(args: &[String], name: &str) -> bool {
    args.iter().any(|a| a == name)
}

fn build_provider(args: &[String]) -> Arc<dyn Provider> {
    if let Some(path) = parse_flag(args, "--ipc") {
        return Arc::new(IpcProvider::new(path));
    }

    let address = parse_flag(args, "--addr").unwrap_or_else(|| "127.0.0.1:8545".to_owned());
    let timeout_secs = parse_flag(args, "--timeout")
        .and_then(|t| t.parse().ok())
        .unwrap_or(10);
    let secure = has_flag(args, "--secure");

    Arc::new(HttpProvider::new(HttpProviderConfig::new(
        address,
        timeout_secs,
        secure,
    )))
}

async fn cmd_probe(args: &[String]) {
    let provider = build_provider(args);
    let web3 = Web3::from_arc(provider.clone());

    println!("endpoint:   {}", provider.endpoint());

    let started = Instant::now();
    match web3.client_version().await {
        Ok(version) => {
            println!("client:     {version}");
            println!("latency:    {:?}", started.elapsed());
        }
        Err(err) => {
            eprintln!("probe failed: {err}");
            process::exit(1);
        }
    }

    match web3.net.version().await {
        Ok(network) => println!("network:    {network}"),
        Err(err) => println!("network:    unavailable ({err})"),
    }

    match web3.net.listening().await {
        Ok(listening) => println!("listening:  {listening}"),
        Err(err) => println!("listening:  unavailable ({err})"),
    }

    match web3.eth.block_number().await {
        Ok(head) => println!("head block: {}", head.to_u64_or_zero()),
        Err(err) => println!("head block: unavailable ({err})"),
    }

    match web3.eth.syncing().await {
        Ok(SyncState::Synced) => println!("syncing:    no"),
        Ok(SyncState::Syncing(status)) => println!(
            "syncing:    {} of {}",
            status.current_block.to_u64_or_zero(),
            status.highest_block.to_u64_or_zero()
        ),
        Err(err) => println!("syncing:    unavailable ({err})"),
    }
}

async fn cmd_call(args: &[String]) {
    let Some(method) = parse_flag(args, "--method") else {
        eprintln!("call requires --method");
        process::exit(1);
    };

    let params = match parse_flag(args, "--params") {
        Some(text) => match serde_json::from_str::<Value>(&text) {
            Ok(value) => value,
            Err(err) => {
                eprintln!("invalid --params JSON: {err}");
                process::exit(1);
            }
        },
        None => Value::Null,
    };

    let provider = build_provider(args);
    let outcome = provider
        .send_request(&method, params)
        .await
        .and_then(RawResult::into_value);

    match outcome {
        Ok(value) => {
            let rendered =
                serde_json::to_string_pretty(&value).unwrap_or_else(|_| value.to_string());
            println!("{rendered}");
        }
        Err(err) => {
            eprintln!("call failed: {err}");
            process::exit(1);
        }
    }
}
