use crate::chunk::Chunk;
use crate::palette::{blue, green, on_yellow, red, yellow};
use meonji_types::Grade;

fn glyph(grade: Grade) -> Vec<String> {
    match grade {
        Grade::Good => vec![blue("o o"), blue(" ‿")],
        Grade::Moderate => vec![green("o o"), green("---")],
        Grade::Unhealthy => vec![
            yellow(" x  x"),
            format!("{}{}{}", yellow("="), on_yellow(yellow("[  ]")), yellow("=")),
        ],
        Grade::VeryUnhealthy => vec![red("  ,----."), red("  |⊙  ⊙|"), red("[]=(::)=[]")],
    }
}

fn label(grade: Grade) -> String {
    match grade {
        Grade::Good => blue("    좋음"),
        Grade::Moderate => green("    보통"),
        Grade::Unhealthy => yellow("    나쁨"),
        Grade::VeryUnhealthy => red("    매우 나쁨"),
    }
}

/// Face icon for `grade` with its colored label beside the first row.
pub fn face(grade: Grade) -> Chunk {
    Chunk::left(glyph(grade)).merge(&Chunk::line(label(grade)))
}
