use clap::{Arg, Command};
use vimcasts_downloader::episodes::Episodes;
use vimcasts_downloader::error::{OkOrGeneric, Result};
use vimcasts_downloader::format::VideoFormat;
use vimcasts_downloader::models::episode::Episode;
use vimcasts_downloader::requester::Requester;
use vimcasts_downloader::saver::{Saver, DEFAULT_TEMPLATE};

fn build_cli() -> Command {
	Command::new("vimcasts")
		.version(env!("CARGO_PKG_VERSION"))
		.about("Retrieve Vimcasts (http://vimcasts.org) episodes")
		.arg(
			Arg::new("starts-from")
				.short('s')
				.long("starts-from")
				.value_name("NUMBER")
				.help("Number of the episode to start from")
				.default_value("1")
				.value_parser(clap::value_parser!(u32).range(1..)),
		)
		.arg(
			Arg::new("format")
				.short('f')
				.long("format")
				.value_name("FORMAT")
				.help("Preferred video format to fetch")
				.default_value("quicktime"),
		)
		.arg(
			Arg::new("template")
				.short('t')
				.long("template")
				.value_name("TEMPLATE")
				.help("Destination path template ({number}, {title}, {ext})")
				.default_value(DEFAULT_TEMPLATE),
		)
}

#[tokio::main]
async fn main() -> Result<()> {
	env_logger::init();
	let matches = build_cli().get_matches();

	let starts_from = *matches
		.get_one::<u32>("starts-from")
		.ok_or_generic("Missing start episode number.")?;
	let video_format = VideoFormat::new(
		matches
			.get_one::<String>("format")
			.ok_or_generic("Missing video format.")?,
	);
	let template = matches
		.get_one::<String>("template")
		.ok_or_generic("Missing path template.")?;

	let requester = Requester::new();
	let mut episodes = Episodes::new(requester.clone())
		.starting_from(starts_from)
		.with_format(video_format);

	let announce = |episode: &Episode| {
		println!("Loading episode #{} from {}", episode.number, episode.url);
	};
	let skipped = |episode: &Episode| {
		println!("Skipping episode #{}: download failed", episode.number);
	};
	let mut saver = Saver::new(requester);
	saver.on_download.sub(&announce);
	saver.on_failed.sub(&skipped);

	let saved = saver.save_all(&mut episodes, template).await?;
	println!("Done! Saved {} episode(s).", saved);
	Ok(())
}
