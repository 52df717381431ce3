use clap::Parser;
use meadow_grass::GrassConfig;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "meadow",
    version,
    about = "Generate a procedural grass field into an in-memory scene"
)]
pub struct Cli {
    /// TOML file with grass parameters; built-in defaults when omitted
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[arg(long)]
    pub radius: Option<f32>,

    #[arg(long)]
    pub block_side: Option<f32>,

    #[arg(long)]
    pub blades_per_block: Option<u32>,

    /// Only build blocks whose centers lie inside the radius
    #[arg(long)]
    pub mask: bool,

    #[arg(long)]
    pub seed: Option<u64>,

    /// Material name attached to every block
    #[arg(long, default_value = "grass")]
    pub material: String,

    /// Run without a material (the generator skips)
    #[arg(long, conflicts_with = "material")]
    pub no_material: bool,

    /// World position of the field root, as `x,y,z`
    #[arg(long, value_parser = parse_origin, default_value = "0,0,0")]
    pub origin: [f32; 3],

    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Applies command-line overrides on top of a loaded config.
    pub fn apply(&self, cfg: &mut GrassConfig) {
        if let Some(r) = self.radius {
            cfg.radius = r;
        }
        if let Some(s) = self.block_side {
            cfg.block_side = s;
        }
        if let Some(n) = self.blades_per_block {
            cfg.blades_per_block = n;
        }
        if self.mask {
            cfg.use_circular_mask = true;
        }
        if self.seed.is_some() {
            cfg.seed = self.seed;
        }
    }

    pub fn material(&self) -> Option<String> {
        (!self.no_material).then(|| self.material.clone())
    }
}

fn parse_origin(s: &str) -> Result<[f32; 3], String> {
    let parts: Vec<&str> = s.split(',').map(str::trim).collect();
    if parts.len() != 3 {
        return Err(format!("expected x,y,z, got `{}`", s));
    }
    let mut out = [0.0f32; 3];
    for (slot, p) in out.iter_mut().zip(parts) {
        *slot = p
            .parse::<f32>()
            .map_err(|e| format!("bad coordinate `{}`: {}", p, e))?;
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overrides_replace_config_values() {
        let cli = Cli::try_parse_from([
            "meadow",
            "--radius",
            "12.5",
            "--blades-per-block",
            "40",
            "--mask",
            "--seed",
            "9",
        ])
        .unwrap();
        let mut cfg = GrassConfig::default();
        cli.apply(&mut cfg);
        assert_eq!(cfg.radius, 12.5);
        assert_eq!(cfg.blades_per_block, 40);
        assert_eq!(cfg.block_side, 5.0);
        assert!(cfg.use_circular_mask);
        assert_eq!(cfg.seed, Some(9));
        assert_eq!(cli.material().as_deref(), Some("grass"));
        assert_eq!(cli.origin, [0.0, 0.0, 0.0]);
    }

    #[test]
    fn no_material_and_origin() {
        let cli =
            Cli::try_parse_from(["meadow", "--no-material", "--origin", "1, 2.5,-3"]).unwrap();
        assert_eq!(cli.material(), None);
        assert_eq!(cli.origin, [1.0, 2.5, -3.0]);
        assert!(Cli::try_parse_from(["meadow", "--origin", "1,2"]).is_err());
    }
}
