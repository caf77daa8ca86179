use anyhow::Result;
use clap::Parser;
use texbake::internal::*;

/// Bake textures for the bake sets in a settings file.
#[derive(Parser)]
struct BakeFlags {
	/// Path to alternative `bake.toml` file
	#[arg(long, default_value = "bake.toml")]
	settings: PathBuf,

	/// Bake mode (overrides the settings file), e.g. "ao"
	#[arg(long)]
	mode: Option<String>,

	/// Bake all sets into a single image
	#[arg(long)]
	single: bool,

	/// Output directory (overrides the settings file)
	#[arg(long)]
	output: Option<PathBuf>,

	/// Seed for sampled passes
	#[arg(long, default_value_t = 0)]
	seed: u64,

	/// Print the backend calls instead of baking
	#[arg(long)]
	dry_run: bool,

	/// List bake modes and exit
	#[arg(long)]
	list_modes: bool,
}

fn main() {
	env_logger::init();
	let args = BakeFlags::parse();
	exit_on_error(main_result(args))
}

fn main_result(args: BakeFlags) -> Result<()> {
	if args.list_modes {
		for mode in BakeMode::ALL {
			println!("{:<16} {}", mode.key(), mode.pass_type());
		}
		return Ok(());
	}

	let mut settings = BakeSettings::load(&args.settings)?;
	if let Some(mode) = args.mode {
		settings.request.mode = mode;
	}
	if args.single {
		settings.request.bake_single_image = true;
	}
	if let Some(output) = args.output {
		settings.output_dir = output;
	}

	let pack = settings.material_pack()?;
	let (mut ctx, sets) = settings.load_scene()?;
	let orchestrator = Orchestrator::new(&pack, ImageManager::new(settings.format));

	let result = match args.dry_run {
		true => {
			let mut backend = RecordingBackend::new();
			let result = orchestrator.bake(&mut ctx, &mut backend, &settings.request, &sets);
			backend.calls.iter().for_each(|call| println!("{call}"));
			result
		}
		false => orchestrator.bake(&mut ctx, &mut PreviewBackend::new(args.seed), &settings.request, &sets),
	};

	for report in orchestrator.reports.lines() {
		eprintln!("{report}");
	}
	let outcome = result?;

	if !args.dry_run {
		for image in outcome.images {
			let path = orchestrator.images.save(&ctx, image, &settings.output_dir)?;
			println!("{}", path.to_string_lossy());
		}
	}
	Ok(())
}
