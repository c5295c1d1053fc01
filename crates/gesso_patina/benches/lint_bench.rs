//! Benchmark for gesso_patina linter.

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use gesso_patina::Linter;

fn bench_lint_small(c: &mut Criterion) {
    let source = r#"
import React from 'react';
import PropTypes from 'prop-types';

class Greeting extends React.Component {
  static propTypes = {
    name: PropTypes.string,
    greeting: PropTypes.string,
  };
  static defaultProps = {
    name: 'World',
    greeting: 'Hello',
  };
  render() {
    return <h1>{this.props.greeting}, {this.props.name}</h1>;
  }
}

export default Greeting;
"#;

    let linter = Linter::new();

    let mut group = c.benchmark_group("component");
    group.throughput(Throughput::Bytes(source.len() as u64));

    group.bench_function("lint_small", |b| {
        b.iter(|| linter.lint_source(black_box(source), "Greeting.jsx"))
    });

    group.finish();
}

fn bench_lint_large(c: &mut Criterion) {
    // Alternate rewritable and stateful classes
    let mut source = String::from("import React from 'react';\n\n");
    for i in 0..100 {
        source.push_str(&format!(
            r#"class Item{i} extends React.Component {{
  static defaultProps = {{ label: 'item', count: {i} }};
  render() {{
    const {{ label }} = this.props;
    return <li title={{label}}>{{this.props.count}}</li>;
  }}
}}

class Counter{i} extends React.Component {{
  state = {{ value: {i} }};
  render() {{
    return <button onClick={{() => this.setState({{ value: 0 }})}}>{{this.state.value}}</button>;
  }}
}}

"#,
        ));
    }

    let linter = Linter::new();

    let mut group = c.benchmark_group("component");
    group.throughput(Throughput::Bytes(source.len() as u64));

    group.bench_function("lint_large", |b| {
        b.iter(|| linter.lint_source(black_box(&source), "Items.jsx"))
    });

    group.finish();
}

criterion_group!(benches, bench_lint_small, bench_lint_large);
criterion_main!(benches);
