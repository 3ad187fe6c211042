fn main() {
    if let Err(err) = rsync_backup::cli::run() {
        println!("{}", err);
        std::process::exit(2);
    }
}
