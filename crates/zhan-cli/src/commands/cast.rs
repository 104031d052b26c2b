use std::path::PathBuf;

use clap::Args;
use zhan_oracle::{
    CastMode, CourseSeed, Diviner, Method, OracleConfig, OracleError, build_prompt,
};

#[derive(Args)]
pub struct CastArgs {
    /// Method: liuyao, qimen, daliuren, ziwei (or 六爻, 奇门, 六壬, 紫微)
    method: String,

    /// Moment to cast for, e.g. "2024-03-15 08:00" (default: now)
    #[arg(short, long)]
    at: Option<String>,

    /// Six-line cast mode: random or time
    #[arg(short, long, default_value = "random")]
    mode: String,

    /// Da Liu Ren course seed: random or day
    #[arg(long, default_value = "random")]
    course_seed: String,

    /// RNG seed for reproducible casts
    #[arg(short, long)]
    seed: Option<u64>,

    /// Output format: pretty, text, json, prompt
    #[arg(short, long, default_value = "pretty")]
    format: String,

    /// Question appended to the prompt
    #[arg(short, long)]
    question: Option<String>,

    /// Output file path (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

pub fn run(args: &CastArgs) -> Result<(), String> {
    let method = Method::parse(&args.method).map_err(|e| e.to_string())?;
    let mode = CastMode::parse(&args.mode)
        .ok_or_else(|| OracleError::UnknownCastMode(args.mode.clone()).to_string())?;
    let course_seed = CourseSeed::parse(&args.course_seed)
        .ok_or_else(|| OracleError::UnknownCourseSeed(args.course_seed.clone()).to_string())?;
    let moment = super::parse_moment(args.at.as_deref())?;

    let mut config = OracleConfig::default()
        .with_cast_mode(mode)
        .with_course_seed(course_seed);
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }

    let chart = Diviner::new(config).cast(method, Some(moment));

    let content = match args.format.as_str() {
        "pretty" => {
            if args.output.is_some() {
                colored::control::set_override(false);
            }
            super::render::pretty(&chart)
        }
        "text" => chart.to_text(),
        "json" => {
            let mut json = chart.to_json().map_err(|e| e.to_string())?;
            json.push('\n');
            json
        }
        "prompt" => {
            let mut prompt = build_prompt(&chart, args.question.as_deref());
            prompt.push('\n');
            prompt
        }
        other => {
            return Err(format!(
                "unsupported format: \"{other}\". Use: pretty, text, json, prompt"
            ));
        }
    };

    super::emit(&content, args.output.as_deref())
}
