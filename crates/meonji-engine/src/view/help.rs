use crate::palette::cyan;
use meonji_types::District;

/// Usage page for the service at `url`; `example` supplies the district
/// used in the sample requests.
pub fn render_help(url: &str, example: &District) -> String {
    let curl = |path: &str| cyan(format!("curl {}{}", url, path));

    let mut view = String::new();
    view.push_str("사용법:\n\n");
    view.push_str(&format!("    $ {}              # 서울시 평균 공기 상태\n", curl("")));
    view.push_str(&format!("    $ {}   # 자치구별 공기 상태\n", curl("/<district>")));
    view.push_str("\n자치구 표기법:\n\n");
    view.push_str(&format!("    $ {}     # 자치구 코드 목록\n", curl("/stations")));
    view.push_str("\n    <district>는 세 가지 방식 중 하나로 표기할 수 있습니다.\n\n");
    view.push_str("        - 이름:\n");
    view.push_str("            jongno, gangnam, ...\n\n");
    view.push_str("        - 이름-gu:\n");
    view.push_str("            jongnogu, gangnamgu, ...\n\n");
    view.push_str("        - 코드:\n");
    view.push_str("            111123, 111261, ...\n");
    view.push_str("\n예시:\n\n");
    for id in [example.short, example.long, example.code] {
        view.push_str(&format!("    $ curl {}/{}\n", url, cyan(id)));
    }
    view.push_str("\n도움말:\n\n");
    view.push_str(&format!("    $ {}         # 지금 보고 있는 도움말\n", curl("/help")));
    view
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::strip_ansi;
    use meonji_types::DISTRICTS;

    #[test]
    fn test_help_interpolates_url() {
        let view = render_help("air.example.com", &DISTRICTS[0]);
        let plain = strip_ansi(&view);
        assert!(plain.starts_with("사용법:\n\n    $ curl air.example.com              # 서울시 평균 공기 상태\n"));
        assert!(plain.contains("    $ curl air.example.com/stations     # 자치구 코드 목록\n"));
        assert!(plain.contains("    $ curl air.example.com/jongnogu\n"));
        assert!(plain.ends_with("    $ curl air.example.com/help         # 지금 보고 있는 도움말\n"));
    }

    #[test]
    fn test_help_colors_example_identifiers() {
        let view = render_help("air.example.com", &DISTRICTS[22]);
        assert!(view.contains(&format!("air.example.com/{}\n", cyan("gangnam"))));
        assert!(view.contains(&format!("air.example.com/{}\n", cyan("111261"))));
    }
}
