//! Host-side helper: `cargo run` builds the WASM bundle into `static/pkg`
//! and serves `static/` locally.

#[cfg(not(target_arch = "wasm32"))]
mod dev {
    use std::path::PathBuf;
    use std::process::{Command, ExitCode, Stdio};

    use clap::Parser;

    #[derive(Parser, Debug, Clone)]
    #[command(name = "sports_landing")]
    #[command(about = "Build and serve the landing page locally", long_about = None)]
    pub struct Cli {
        /// Port for the local HTTP server
        #[arg(long, default_value_t = 8000)]
        pub port: u16,

        /// Serve whatever is already in static/pkg instead of rebuilding
        #[arg(long = "skip-wasm", default_value = "false")]
        pub skip_wasm: bool,

        /// Directory served as the site root
        #[arg(long = "static-dir", default_value = "static")]
        pub static_dir: PathBuf,
    }

    fn build_wasm(static_dir: &std::path::Path) -> bool {
        log::info!("building wasm pkg");
        let out_dir = static_dir.join("pkg");
        match Command::new("wasm-pack")
            .args(["build", "--release", "--target", "web", "--out-dir"])
            .arg(&out_dir)
            .status()
        {
            Ok(st) if st.success() => true,
            Ok(_) => {
                log::error!("wasm-pack finished with errors");
                false
            }
            Err(_) => {
                log::warn!("wasm-pack not found in PATH; the site may serve stale artifacts");
                true
            }
        }
    }

    pub fn run() -> ExitCode {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
        let cli = Cli::parse();

        if !cli.skip_wasm && !build_wasm(&cli.static_dir) {
            return ExitCode::FAILURE;
        }

        log::info!("serving {} at http://127.0.0.1:{}", cli.static_dir.display(), cli.port);
        let status = Command::new("python3")
            .args(["-m", "http.server"])
            .arg(cli.port.to_string())
            .arg("--directory")
            .arg(&cli.static_dir)
            .stdout(Stdio::null())
            .stderr(Stdio::inherit())
            .status();

        match status {
            Ok(st) if st.success() => ExitCode::SUCCESS,
            Ok(st) => {
                log::error!("http server exited with {st}");
                ExitCode::FAILURE
            }
            Err(e) => {
                log::error!("failed to start http server: {e}");
                ExitCode::FAILURE
            }
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> std::process::ExitCode {
    dev::run()
}

// The binary has nothing to do inside the browser.
#[cfg(target_arch = "wasm32")]
fn main() {}
