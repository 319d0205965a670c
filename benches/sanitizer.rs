use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use ops_whisperer::sanitizer::OutputSanitizer;
use ops_whisperer::security::SafetyGate;

// Representative generator outputs
const RESPONSES: &[(&str, &str)] = &[
    ("plain", "docker run -d -p 80:80 nginx"),
    (
        "single_block",
        "Here is the command:\n```bash\nkubectl apply -f deploy.yaml\n```\nThis applies the manifest.",
    ),
    (
        "multi_block",
        "I will first show the manifest:\n```yaml\napiVersion: v1\nkind: Service\n```\nThen apply it:\n```bash\nkubectl apply -f service.yaml\n```\nTotal code: 2 files",
    ),
];

fn bench_sanitize(c: &mut Criterion) {
    let mut group = c.benchmark_group("sanitize");

    for (name, response) in RESPONSES {
        group.bench_with_input(BenchmarkId::from_parameter(name), response, |b, response| {
            b.iter(|| OutputSanitizer::sanitize(black_box(response)))
        });
    }

    let long = format!(
        "{}```bash\ndocker system df\n```",
        "explanation line\n".repeat(5_000)
    );
    group.bench_with_input(BenchmarkId::new("long", long.len()), &long, |b, text| {
        b.iter(|| OutputSanitizer::sanitize(black_box(text)))
    });

    group.finish();
}

fn bench_filter_lines(c: &mut Criterion) {
    let text = "Here is it\n$ docker ps\ndocker ps -a\n".repeat(500);
    c.bench_function("filter_lines", |b| {
        b.iter(|| OutputSanitizer::filter_lines(black_box(&text)))
    });
}

fn bench_safety_gate(c: &mut Criterion) {
    let gate = SafetyGate::new();
    let mut group = c.benchmark_group("safety_gate");

    for command in ["docker run -d -p 80:80 nginx", "rm -rf /", "echo hi"] {
        group.bench_with_input(BenchmarkId::from_parameter(command), &command, |b, command| {
            b.iter(|| gate.is_safe(black_box(command)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_sanitize, bench_filter_lines, bench_safety_gate);
criterion_main!(benches);
