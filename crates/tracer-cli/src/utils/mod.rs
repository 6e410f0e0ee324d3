use core::fmt::Display;

use anyhow::bail;
use clap::ValueEnum;
use tracer::scene::{
    examples::{DebugScene, SpheresScene},
    Scene,
};

#[derive(Debug, Default, Clone, Copy, ValueEnum)]
pub enum AvailableScene {
    #[default]
    Spheres,
    Debug,
}

impl AvailableScene {
    pub fn insert_into(self, scene: &mut Scene) {
        match self {
            AvailableScene::Spheres => SpheresScene::insert_into(scene),
            AvailableScene::Debug => DebugScene::insert_into(scene),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl std::str::FromStr for Dimensions {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut split_it = s.split('x');
        let (Some(a), Some(b), None) = (split_it.next(), split_it.next(), split_it.next()) else {
            bail!("Incorrect format, expected `width`x`height`");
        };
        let width: u32 = a.trim().parse()?;
        let height: u32 = b.trim().parse()?;
        if width == 0 || height == 0 {
            bail!("Image dimensions must be positive, got {width}x{height}");
        }

        Ok(Dimensions { width, height })
    }
}

impl Display for Dimensions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("{}x{}", self.width, self.height))
    }
}
