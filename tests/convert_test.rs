//! Integration tests for full page conversion.

use atdown::{convert, parse, Converter, Error, Language, RenderOptions};

/// A bilingual page modeled on the real AtCoder markup: both language
/// variants inside `div#task-statement`, sections wrapped in `div.part`.
const BILINGUAL_PAGE: &str = r#"<html>
<head><title>ABC001 A - 積雪深差</title></head>
<body>
<span class="h2">A - 積雪深差</span>
<p>実行時間制限: 2 sec / メモリ制限: 1024 MB</p>
<div id="task-statement">
  <span class="lang-ja">
    <div class="part"><section>
      <h3>問題文</h3>
      <p>2 つの観測所での積雪深がそれぞれ <var>a</var> cm, <var>b</var> cm であるとき、差を求めよ。</p>
    </section></div>
    <div class="part"><section>
      <h3>制約</h3>
      <ul>
        <li><var>0 \leq a, b \leq 100</var></li>
        <li>入力はすべて整数</li>
      </ul>
    </section></div>
    <div class="part"><section>
      <h3>入力例 1</h3>
      <pre>15 10</pre>
    </section></div>
    <div class="part"><section>
      <h3>出力例 1</h3>
      <pre>5</pre>
    </section></div>
    <div class="part"><section>
      <h3>入力例 2</h3>
      <pre>0 0</pre>
    </section></div>
    <div class="part"><section>
      <h3>出力例 2</h3>
      <pre>0</pre>
    </section></div>
  </span>
  <span class="lang-en">
    <div class="part"><section>
      <h3>Problem Statement</h3>
      <p>Given snow depths <var>a</var> cm and <var>b</var> cm at two stations, find their difference.</p>
    </section></div>
    <div class="part"><section>
      <h3>Constraints</h3>
      <ul>
        <li><var>0 \leq a, b \leq 100</var></li>
        <li>All input values are integers</li>
      </ul>
    </section></div>
    <div class="part"><section>
      <h3>Sample Input 1</h3>
      <pre>15 10</pre>
    </section></div>
    <div class="part"><section>
      <h3>Sample Output 1</h3>
      <pre>5</pre>
    </section></div>
    <div class="part"><section>
      <h3>Sample Input 2</h3>
      <pre>0 0</pre>
    </section></div>
    <div class="part"><section>
      <h3>Sample Output 2</h3>
      <pre>0</pre>
    </section></div>
  </span>
</div>
</body>
</html>"#;

const EN_ONLY_PAGE: &str = r#"<html>
<head><title>ABC100 A - Sum</title></head>
<body>
<p>Time Limit: 2 sec / Memory Limit: 1024 MB</p>
<div id="task-statement">
  <span class="lang-en">
    <section>
      <h3>Problem Statement</h3>
      <p>Find the sum of A and B.</p>
      <h3>Sample Input 1</h3>
      <pre>1 2</pre>
      <h3>Sample Output 1</h3>
      <pre>3</pre>
    </section>
  </span>
</div>
</body>
</html>"#;

#[test]
fn converts_both_language_variants() {
    let ja = convert(BILINGUAL_PAGE, Language::Ja).unwrap();
    let en = convert(BILINGUAL_PAGE, Language::En).unwrap();

    assert!(ja.contains("## 問題文"));
    assert!(ja.contains("差を求めよ"));
    assert!(!ja.contains("Problem Statement"));
    assert!(!ja.contains("find their difference"));

    assert!(en.contains("## Problem Statement"));
    assert!(en.contains("find their difference"));
    assert!(!en.contains("問題文"));
    assert!(!en.contains("差を求めよ"));
}

#[test]
fn sample_fences_balanced_and_numbered() {
    for language in [Language::Ja, Language::En] {
        let md = convert(BILINGUAL_PAGE, language).unwrap();

        let inputs = md.matches("```sample-input-").count();
        let outputs = md.matches("```sample-output-").count();
        assert_eq!(inputs, outputs);
        assert_eq!(inputs, 2);

        // Numbered 1..N with no gaps or repeats, in document order.
        for n in 1..=2 {
            assert_eq!(md.matches(&format!("```sample-input-{}\n", n)).count(), 1);
            assert_eq!(md.matches(&format!("```sample-output-{}\n", n)).count(), 1);
        }
        let first = md.find("sample-input-1").unwrap();
        let second = md.find("sample-input-2").unwrap();
        assert!(first < second);
    }
}

#[test]
fn missing_language_fails() {
    let result = convert(EN_ONLY_PAGE, Language::Ja);
    assert!(matches!(result, Err(Error::LanguageNotFound(_))));
}

#[test]
fn missing_statement_container_fails() {
    let html = "<html><head><title>T</title></head><body><p>no statement</p></body></html>";
    let result = convert(html, Language::Ja);
    assert!(matches!(result, Err(Error::MissingStatement)));
}

#[test]
fn conversion_is_deterministic() {
    let first = convert(BILINGUAL_PAGE, Language::En).unwrap();
    let second = convert(BILINGUAL_PAGE, Language::En).unwrap();
    assert_eq!(first, second);
}

#[test]
fn sum_scenario_produces_expected_markdown() {
    let md = convert(EN_ONLY_PAGE, Language::En).unwrap();

    assert!(md.contains("## Problem Statement"));
    assert!(md.contains("Find the sum of A and B."));
    assert!(md.contains("```sample-input-1\n1 2\n```"));
    assert!(md.contains("```sample-output-1\n3\n```"));
}

#[test]
fn title_and_limits_rendered() {
    let md = convert(BILINGUAL_PAGE, Language::Ja).unwrap();
    assert!(md.starts_with("# ABC001 A - 積雪深差"));
    assert!(md.contains("**Time Limit:** 2 sec"));
    assert!(md.contains("**Memory Limit:** 1024 MB"));
}

#[test]
fn math_and_constraints_preserved() {
    let md = convert(BILINGUAL_PAGE, Language::En).unwrap();

    assert!(md.contains("snow depths $a$ cm and $b$ cm"));
    assert!(md.contains("- $0 \\leq a, b \\leq 100$"));
    assert!(md.contains("- All input values are integers"));
}

#[test]
fn no_html_tags_leak_into_output() {
    for language in [Language::Ja, Language::En] {
        let md = convert(BILINGUAL_PAGE, language).unwrap();
        for tag in ["<p>", "<var>", "<pre>", "<section>", "<span", "<div", "<h3>"] {
            assert!(!md.contains(tag), "tag {} leaked into output", tag);
        }
    }
}

#[test]
fn parsed_model_matches_rendered_samples() {
    let problem = parse(BILINGUAL_PAGE, Language::En).unwrap();
    let pairs = problem.sample_pairs();

    assert_eq!(pairs.len(), 2);
    assert_eq!(pairs[0].number, 1);
    assert_eq!(pairs[0].input, "15 10");
    assert_eq!(pairs[0].output, "5");
    assert_eq!(pairs[1].number, 2);
    assert_eq!(pairs[1].input, "0 0");
    assert_eq!(pairs[1].output, "0");
}

#[test]
fn builder_render_options_respected() {
    let md = Converter::new()
        .language(Language::En)
        .without_title()
        .without_limits()
        .list_marker('*')
        .convert(BILINGUAL_PAGE)
        .unwrap();

    assert!(!md.contains("# ABC001"));
    assert!(!md.contains("Time Limit"));
    assert!(md.contains("* $0 \\leq a, b \\leq 100$"));
}

#[test]
fn statement_without_samples_fails_then_lenient_succeeds() {
    let html = r#"<html><head><title>X - Interactive</title></head><body>
<div id="task-statement"><span class="lang-en"><section>
<h3>Problem Statement</h3><p>This is an interactive task.</p>
</section></span></div></body></html>"#;

    assert!(matches!(
        convert(html, Language::En),
        Err(Error::MissingSamples)
    ));

    let md = Converter::new()
        .language(Language::En)
        .lenient()
        .convert(html)
        .unwrap();
    assert!(md.contains("This is an interactive task."));
}

#[test]
fn render_options_default_roundtrip() {
    let problem = parse(EN_ONLY_PAGE, Language::En).unwrap();
    let md = atdown::render::to_markdown(&problem, &RenderOptions::default()).unwrap();
    assert!(md.contains("# ABC100 A - Sum"));
}
