use criterion::{black_box, criterion_group, criterion_main, Criterion};
use guidon_scanner::{classify, Classification, StringCursor};

// A medium-size source (~40 lines) with typical nesting, mixing tab and
// space indentation the way hand-edited files do
const SOURCE: &str = "\
fn run(jobs: &[Job]) -> Result<Summary, RunError> {
    let mut summary = Summary::default();
    for job in jobs {
        match job.kind {
            JobKind::Build => {
                let artifact = build(job)?;
                summary.artifacts.push(artifact);
            }
            JobKind::Test => {
                for case in &job.cases {
                    if case.skipped {
                        summary.skipped += 1;
                        continue;
                    }
                    let outcome = execute(case)?;
                    summary.record(outcome);
                }
            }
        }
    }
    Ok(summary)
}

impl Summary {
\tfn record(&mut self, outcome: Outcome) {
\t\tmatch outcome {
\t\t\tOutcome::Pass => self.passed += 1,
\t\t\tOutcome::Fail(reason) => {
\t\t\t\tself.failed += 1;
\t\t\t\tself.reasons.push(reason);
\t\t\t}
\t\t}
\t}
}

const BANNER: &str = \"guides\";
";

fn classify_line(line: &str, space_units: u32) -> usize {
    let mut cursor = StringCursor::new(line, space_units);
    let mut guides = 0;
    loop {
        match classify(&mut cursor, space_units) {
            Classification::Guide(_) => guides += 1,
            Classification::None => break,
        }
    }
    guides
}

fn bench_classify(c: &mut Criterion) {
    c.bench_function("classify_visible_lines", |b| {
        b.iter(|| {
            let mut total = 0;
            for line in black_box(SOURCE).lines() {
                total += classify_line(line, 4);
            }
            black_box(total)
        })
    });

    c.bench_function("classify_deep_indent", |b| {
        let line = format!("{}value", " ".repeat(64));
        b.iter(|| classify_line(black_box(&line), 4))
    });
}

criterion_group!(benches, bench_classify);
criterion_main!(benches);
