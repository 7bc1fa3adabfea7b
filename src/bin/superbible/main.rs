use clap::Parser;

use superbible::manifest::ManifestLoader;
use superbible::{Example, RenderLoop};

mod app;
mod args;

use app::{App, WindowSettings};
use args::Args;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // clion needs help in trait annotation
    let args = <Args as Parser>::parse();

    let mut example = Example::new(args.example.into());

    if let Some(path) = &args.shaders {
        match ManifestLoader::new().load_path(path) {
            Ok(sources) => example = example.with_sources(sources),
            Err(e) => {
                log::error!("Could not read shader manifest: {e}");
                std::process::exit(1);
            }
        }
    }

    let settings = WindowSettings {
        width: args.width,
        height: args.height,
        ..Default::default()
    };

    let app = match App::new(&settings) {
        Ok(app) => app,
        Err(e) => {
            log::error!("Could not open window: {e}");
            std::process::exit(1);
        }
    };

    log::info!("Running {} sample", example.kind);

    app.run(RenderLoop::new(example));
}
