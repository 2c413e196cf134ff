use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::Once;
use std::thread;
use log::LevelFilter;
use simplelog::{Config, TestLogger};
use crate::opcode_record::RawRow;


static START: Once = Once::new();

fn init_logger_for_test() {
    START.call_once(|| TestLogger::init(LevelFilter::Trace, Config::default()).unwrap());
}

pub fn init() {
    init_logger_for_test();
}

fn sample_rows() -> Vec<RawRow> {
    vec![
        RawRow::new("0A", "const/16 vx,lit16", "Puts 16-bit const into vx", ""),
        RawRow::new("06", "move-result vx", "Moves result into vx", ""),
    ]
}

/// Answers a single HTTP request on a local port and returns the URL to fetch.
fn serve_once(status: &'static str, body: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();

    thread::spawn(move || {
        if let Ok((mut stream, _)) = listener.accept() {
            let mut request = [0u8; 4096];
            let _ = stream.read(&mut request);

            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: text/html\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status, body.len(), body
            );
            let _ = stream.write_all(response.as_bytes());
            let _ = stream.flush();
        }
    });

    format!("http://{}/dalvik_opcodes.html", addr)
}
