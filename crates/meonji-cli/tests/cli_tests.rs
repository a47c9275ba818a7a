//! Binary-level tests: argument handling, config, record loading and the
//! color policy, checked against the plain-text views.

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// The binary with config isolated to `home` and no color policy set.
#[allow(deprecated)]
fn meonji_colored(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("meonji").unwrap();
    cmd.env("MEONJI_CONFIG", home.join("config.toml"))
        .env_remove("MEONJI_URL")
        .env_remove("RUST_LOG");
    cmd
}

fn meonji(home: &Path) -> Command {
    let mut cmd = meonji_colored(home);
    cmd.args(["--color", "never"]);
    cmd
}

fn write(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_stations_lists_catalog() {
    let home = TempDir::new().unwrap();
    meonji(home.path())
        .arg("stations")
        .assert()
        .success()
        .stdout(predicate::str::starts_with(" 자치구 표기법:\n\n"))
        .stdout(predicate::str::contains(
            "    jongno        jongnogu        111123   # 종로구 \n",
        ))
        .stdout(predicate::str::contains(
            "    gangdong      gangdonggu      111274   # 강동구 \n",
        ))
        .stdout(predicate::str::ends_with(
            "    $ curl meonji.cafe24app.com/111123     # 종로구 공기 상태\n",
        ));
}

#[test]
fn test_help_uses_configured_url() {
    let home = TempDir::new().unwrap();
    write(home.path(), "config.toml", "url = \"air.example.com\"\n");

    meonji(home.path())
        .arg("help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "    $ curl air.example.com/stations     # 자치구 코드 목록\n",
        ));
}

#[test]
fn test_url_env_overrides_config() {
    let home = TempDir::new().unwrap();
    write(home.path(), "config.toml", "url = \"air.example.com\"\n");

    meonji(home.path())
        .env("MEONJI_URL", "localhost:8080")
        .arg("stations")
        .assert()
        .success()
        .stdout(predicate::str::contains("curl localhost:8080/jongno"));
}

#[test]
fn test_no_command_shows_usage() {
    let home = TempDir::new().unwrap();
    meonji(home.path())
        .assert()
        .success()
        .stdout(predicate::str::starts_with("사용법:\n"));
}

#[test]
fn test_seoul_maintenance_page() {
    let home = TempDir::new().unwrap();
    let current = write(
        home.path(),
        "current.json",
        r#"{"ListAvgOfSeoulAirQualityService":{"row":[{"GRADE":"점검중","PM10":"40"}]}}"#,
    );
    let pm10 = write(
        home.path(),
        "pm10.json",
        r#"{"FA_ON":"f","CAISTEP":"보통","APPLC_DT":"20170305110000"}"#,
    );

    meonji(home.path())
        .args(["seoul", "--today", "2017-03-05"])
        .arg("--current")
        .arg(&current)
        .arg("--pm10")
        .arg(&pm10)
        .assert()
        .success()
        .stdout(
            " 서울시 공기 상태:\n\n     점검 중\n\n 서울시 예보:\n\n     오늘 PM-10  보통\n\n     ?\n 자료 제공: Air Korea\n",
        );
}

#[test]
fn test_district_page() {
    let home = TempDir::new().unwrap();
    let current = write(
        home.path(),
        "current.json",
        r#"{"MSRSTENAME":"종로구","MSRDATE":"201703051900","GRADE":"나쁨",
            "PM10":95,"PM25":"60","OZONE":"0.012","NITROGEN":"0.051",
            "CARBON":"0.9","SULFUROUS":"0.006"}"#,
    );
    let pm25 = write(
        home.path(),
        "pm25.json",
        r#"{"FA_ON":"a","ALERTSTEP":"매우나쁨","CNDT1":"외출을 삼가세요",
            "APPLC_DT":"20170305200000"}"#,
    );

    meonji(home.path())
        .args(["district", "JONGNOGU", "--today", "2017-03-06"])
        .arg("--current")
        .arg(&current)
        .arg("--pm25")
        .arg(&pm25)
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            " 종로구 공기 상태 (03월 05일 오후 7시 기준):\n\n      x  x     나쁨\n",
        ))
        .stdout(predicate::str::contains("│ 95 µg/m³  │ 60 µg/m³  │"))
        .stdout(predicate::str::contains(
            "     ?\n     오늘 PM-2.5 매우나쁨\n         외출을 삼가세요\n",
        ));
}

#[test]
fn test_district_without_records_uses_catalog_name() {
    let home = TempDir::new().unwrap();
    meonji(home.path())
        .args(["district", "111261", "--today", "2017-03-05"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(" 강남구 공기 상태:\n\n     ?\n"));
}

#[test]
fn test_unknown_district_shows_usage() {
    let home = TempDir::new().unwrap();
    meonji(home.path())
        .args(["district", "busan"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("사용법:\n"));
}

#[test]
fn test_missing_record_file_fails() {
    let home = TempDir::new().unwrap();
    meonji(home.path())
        .args(["seoul", "--current"])
        .arg(home.path().join("nope.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: Failed to read"));
}

#[test]
fn test_color_always_keeps_escapes() {
    let home = TempDir::new().unwrap();
    meonji_colored(home.path())
        .args(["--color", "always", "stations"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\x1b[36mjongno\x1b[39m"));
}

#[test]
fn test_color_auto_is_plain_when_piped() {
    let home = TempDir::new().unwrap();
    meonji_colored(home.path())
        .arg("stations")
        .assert()
        .success()
        .stdout(predicate::str::contains("\x1b[").not());
}
