use std::{fs::File, process::ExitCode};

use itsatoshi_site::{blog::list_posts, config::SiteConfig, rss::build_channel};

const OUTPUT: &str = "public/rss.xml";

fn main() -> ExitCode {
    let posts = match list_posts() {
        Ok(posts) => posts,
        Err(e) => {
            eprintln!("couldn't load posts: {e}");
            return ExitCode::FAILURE;
        }
    };
    let channel = build_channel(&SiteConfig::load(), &posts);

    let written = File::create(OUTPUT)
        .map_err(|e| e.to_string())
        .and_then(|file| {
            channel
                .pretty_write_to(file, b' ', 2)
                .map_err(|e| e.to_string())
        });
    match written {
        Ok(_) => {
            println!("wrote {} items to {OUTPUT}", posts.len());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("couldn't write {OUTPUT}: {e}");
            ExitCode::FAILURE
        }
    }
}
