//! `EnvVar` bindings against the process environment.

use envconv::EnvVar;

struct Settings;

impl Settings {
    fn string() -> EnvVar<String> {
        EnvVar::new("ENVCONV_BT_STRING", "hello".to_string())
    }

    fn optional_string() -> EnvVar<Option<String>> {
        EnvVar::optional("ENVCONV_BT_OPTIONAL_STRING")
    }

    fn int() -> EnvVar<i32> {
        EnvVar::new("ENVCONV_BT_INT", 1)
    }

    fn optional_int() -> EnvVar<Option<i32>> {
        EnvVar::optional("ENVCONV_BT_OPTIONAL_INT")
    }

    fn ratios() -> EnvVar<Vec<f64>> {
        EnvVar::new("ENVCONV_BT_RATIOS", vec![0.5])
    }

    #[cfg(feature = "url")]
    fn endpoint() -> EnvVar<url::Url> {
        let fallback = url::Url::parse("http://localhost:8000/").unwrap();
        EnvVar::new("ENVCONV_BT_ENDPOINT", fallback)
    }
}

#[test]
fn test_string() {
    assert_eq!(Settings::string().get(), "hello");

    envconv::set_raw("ENVCONV_BT_STRING", "string").unwrap();
    assert_eq!(Settings::string().get(), "string");

    envconv::remove("ENVCONV_BT_STRING").unwrap();
    assert_eq!(Settings::string().get(), "hello");

    Settings::string().set(&"custom".to_string()).unwrap();
    assert_eq!(Settings::string().get(), "custom");
    assert_eq!(
        envconv::get_raw("ENVCONV_BT_STRING").unwrap().as_deref(),
        Some("custom")
    );

    envconv::remove("ENVCONV_BT_STRING").unwrap();
}

#[test]
fn test_optional_string() {
    assert_eq!(Settings::optional_string().get(), None);

    envconv::set_raw("ENVCONV_BT_OPTIONAL_STRING", "string").unwrap();
    assert_eq!(Settings::optional_string().get().as_deref(), Some("string"));

    Settings::optional_string()
        .set(&Some("custom".to_string()))
        .unwrap();
    assert_eq!(
        envconv::get_raw("ENVCONV_BT_OPTIONAL_STRING").unwrap().as_deref(),
        Some("custom")
    );

    Settings::optional_string().set(&None).unwrap();
    assert_eq!(Settings::optional_string().get(), None);
    assert_eq!(envconv::get_raw("ENVCONV_BT_OPTIONAL_STRING").unwrap(), None);
}

#[test]
fn test_int() {
    assert_eq!(Settings::int().get(), 1);

    envconv::set_raw("ENVCONV_BT_INT", "2").unwrap();
    assert_eq!(Settings::int().get(), 2);

    envconv::set_raw("ENVCONV_BT_INT", "two").unwrap();
    assert_eq!(Settings::int().get(), 1);

    Settings::int().set(&3).unwrap();
    assert_eq!(Settings::int().get(), 3);
    assert_eq!(envconv::get_raw("ENVCONV_BT_INT").unwrap().as_deref(), Some("3"));

    envconv::remove("ENVCONV_BT_INT").unwrap();
}

#[test]
fn test_optional_int() {
    assert_eq!(Settings::optional_int().get(), None);

    Settings::optional_int().set(&Some(2)).unwrap();
    assert_eq!(Settings::optional_int().get(), Some(2));

    envconv::set_raw("ENVCONV_BT_OPTIONAL_INT", "2.5").unwrap();
    assert_eq!(Settings::optional_int().get(), None);

    Settings::optional_int().set(&None).unwrap();
    assert_eq!(envconv::get_raw("ENVCONV_BT_OPTIONAL_INT").unwrap(), None);
}

#[test]
fn test_sequence_binding() {
    assert_eq!(Settings::ratios().get(), vec![0.5]);

    Settings::ratios().set(&vec![0.25, 1.0]).unwrap();
    assert_eq!(
        envconv::get_raw("ENVCONV_BT_RATIOS").unwrap().as_deref(),
        Some("0.25,1")
    );
    assert_eq!(Settings::ratios().get(), vec![0.25, 1.0]);

    envconv::set_raw("ENVCONV_BT_RATIOS", "0.25,x").unwrap();
    assert_eq!(Settings::ratios().get(), vec![0.5]);

    envconv::remove("ENVCONV_BT_RATIOS").unwrap();
}

#[cfg(feature = "url")]
#[test]
fn test_url_binding() {
    let endpoint = Settings::endpoint();
    assert_eq!(endpoint.get().as_str(), "http://localhost:8000/");

    envconv::set_raw("ENVCONV_BT_ENDPOINT", "https://api.example.com/v1").unwrap();
    assert_eq!(endpoint.get().host_str(), Some("api.example.com"));

    envconv::set_raw("ENVCONV_BT_ENDPOINT", "::not a url::").unwrap();
    assert_eq!(endpoint.get().as_str(), "http://localhost:8000/");

    envconv::remove("ENVCONV_BT_ENDPOINT").unwrap();
}
