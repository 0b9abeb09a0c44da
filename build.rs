use std::process::Command;

fn git(args: &[&str]) -> String {
	Command::new("git")
		.args(args)
		.output()
		.ok()
		.filter(|o| o.status.success())
		.and_then(|o| String::from_utf8(o.stdout).ok())
		.map(|s| s.trim().to_string())
		.filter(|s| !s.is_empty())
		.unwrap_or_else(|| "unknown".to_string())
}

fn main() {
	let hash = git(&["rev-parse", "--short", "HEAD"]);
	let branch = git(&["rev-parse", "--abbrev-ref", "HEAD"]);
	let version = match git(&["describe", "--tags", "--always"]).as_str() {
		"unknown" => env!("CARGO_PKG_VERSION").to_string(),
		v => v.to_string(),
	};
	let build_date = chrono::Local::now().format("%Y-%m-%d").to_string();

	println!("cargo:rustc-env=GIT_HASH={hash}");
	println!("cargo:rustc-env=GIT_BRANCH={branch}");
	println!("cargo:rustc-env=GIT_VERSION={version}");
	println!("cargo:rustc-env=BUILD_DATE={build_date}");
	println!("cargo:rerun-if-changed=.git/HEAD");
}
