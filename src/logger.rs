use std::fs::OpenOptions;
use std::io::Write;
use chrono::Utc;

// one line per summarization call, a failed write never fails the request
pub fn log_request(
    status: &str,
    model: &str,
    input_chars: usize,
    duration_ms: u128,
) {
    let timestamp = Utc::now().format("%Y-%m-%d %H:%M:%S");
    let log_entry = format!(
        "{} | {:6} | {:30} | {:8} chars in | {:6} ms\n",
        timestamp, status, model, input_chars, duration_ms
    );

    let log_path = std::env::var("LOG_PATH")
        .unwrap_or_else(|_| "./requests.log".to_string());

    if let Ok(mut file) = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
    {
        let _ = file.write_all(log_entry.as_bytes());
    } else {
        eprintln!("Failed to write to log file: {}", log_path);
    }
}
