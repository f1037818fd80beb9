//! Static log corpora used across harnesses.
//!
//! Each corpus is a `&'static str` holding a whole file's content, blank lines
//! and all, so line-numbering behaviour is exercised alongside parsing.

/// Reference year used for yearless (syslog) timestamps in every harness.
pub const REFERENCE_YEAR: i32 = 2024;

/// Only ISO-8601 stamps, one per line, in ascending order.
pub const CORPUS_ISO: &str = "\
2024-06-15T09:00:00Z service starting
2024-06-15T09:00:01.250Z INFO listening on :8080
2024-06-15T09:05:00+02:00 WARN slow request /api/orders
2024-06-15T09:10:00 ERROR upstream timeout
2024-06-15T09:15:00Z shutdown requested";

/// One line per supported timestamp shape plus unstamped lines.
pub const CORPUS_MIXED_SHAPES: &str = "\
2024-06-15T09:34:10Z iso stamp
2024-06-15 09:34:11 plain stamp

06/15/2024 09:34:12 us stamp
Jun 15 09:34:13 myhost sshd[12345]: notice: session opened
10.0.0.1 - - [15/Jun/2024:09:34:14 +0000] \"GET /index.html HTTP/1.1\" 200 1043

no timestamp on this line";

/// Syslog-style lines; the year comes from the analyzer.
pub const CORPUS_SYSLOG: &str = "\
Jun 15 09:34:10 host kernel: notice: restart
Jun 15 09:34:11 host cron[42]: (root) CMD (run-parts)
Jun 15 09:34:12 host sshd[7]: error: PAM authentication failure";

/// Apache/NCSA access log lines.
pub const CORPUS_APACHE: &str = "\
127.0.0.1 - frank [10/Oct/2024:13:55:36 -0700] \"GET /apache_pb.gif HTTP/1.0\" 200 2326
127.0.0.1 - - [10/Oct/2024:13:55:37 -0700] \"POST /login HTTP/1.0\" 401 12
127.0.0.1 - - [10/Oct/2024:13:55:38 -0700] \"GET /missing HTTP/1.0\" 404 0";

/// Mostly errors, no stamps.
pub const CORPUS_ERRORS: &str = "\
ERROR: NullPointerException at com.example.App.handle(App.java:42)
FATAL: out of memory
critical: disk /dev/sda1 failing";

/// Nothing matching any keyword.
pub const CORPUS_PLAIN: &str = "\
GET /api/v1/users 200 47ms
GET /healthz 200 1ms";

/// Generate `n` synthetic lines, one stamp per second, cycling categories.
pub fn corpus_high_volume(n: usize) -> String {
    (0..n)
        .map(|i| {
            let level = match i % 10 {
                0 => "ERROR",
                1 | 2 => "WARN",
                3..=6 => "INFO",
                _ => "GET",
            };
            format!(
                "2024-01-15 {:02}:{:02}:{:02} {} log line {}",
                i / 3600 % 24,
                i / 60 % 60,
                i % 60,
                level,
                i,
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
