use std::time::Duration;

use clap::{Subcommand, ValueEnum};
use streakdeck_core::animation::{animate, catalog, DecoratorConfig, Edge};
use streakdeck_core::Config;

#[derive(Clone, Copy, ValueEnum)]
pub enum DecoratorArg {
    Fade,
    Slide,
    ScalePop,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum EdgeArg {
    Leading,
    Trailing,
    Top,
    Bottom,
}

impl From<EdgeArg> for Edge {
    fn from(arg: EdgeArg) -> Self {
        match arg {
            EdgeArg::Leading => Edge::Leading,
            EdgeArg::Trailing => Edge::Trailing,
            EdgeArg::Top => Edge::Top,
            EdgeArg::Bottom => Edge::Bottom,
        }
    }
}

#[derive(Subcommand)]
pub enum AnimationAction {
    /// List every named curve, duration and transition
    List,
    /// Sample a decorator's animation frame by frame
    Preview {
        decorator: DecoratorArg,
        /// Edge to slide from (slide only)
        #[arg(long, value_enum, default_value = "bottom")]
        edge: EdgeArg,
        /// Delay before the animation starts, in seconds
        #[arg(long, default_value_t = 0.0)]
        delay: f64,
        /// Animate toward hidden instead of presented
        #[arg(long)]
        hide: bool,
        /// Number of evenly spaced samples
        #[arg(long, default_value_t = 10)]
        frames: u32,
    },
}

pub fn run(action: AnimationAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        AnimationAction::List => {
            println!("{}", serde_json::to_string_pretty(&catalog())?);
        }
        AnimationAction::Preview {
            decorator,
            edge,
            delay,
            hide,
            frames,
        } => {
            let delay = Duration::try_from_secs_f64(delay)
                .map_err(|e| format!("invalid delay {delay}: {e}"))?;
            let settings = Config::load()?.animation;

            let config = match decorator {
                DecoratorArg::Fade => DecoratorConfig::fade(),
                DecoratorArg::Slide => DecoratorConfig::slide(edge.into()),
                DecoratorArg::ScalePop => DecoratorConfig::scale_pop(),
            }
            .with_delay(delay)
            .with_distance(settings.slide_distance);

            let Some(mut instruction) = animate(&config, hide, !hide) else {
                return Ok(());
            };
            if settings.reduce_motion {
                instruction = instruction.reduced();
            }

            let total = instruction.total_duration();
            let steps = frames.max(1);
            let samples: Vec<_> = (0..=steps)
                .map(|i| {
                    let elapsed = if i == steps {
                        total
                    } else {
                        total.mul_f64(f64::from(i) / f64::from(steps))
                    };
                    serde_json::json!({
                        "t_ms": elapsed.as_millis() as u64,
                        "state": instruction.state_at(elapsed),
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&samples)?);
        }
    }
    Ok(())
}
