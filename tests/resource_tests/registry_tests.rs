//! Tests for the resource registry

use coap_gpio::hardware::SimulatedGpio;
use coap_gpio::resource::{Lookup, Method, Registry};

fn registry() -> Registry<SimulatedGpio> {
    Registry::standard()
}

#[test]
fn test_standard_resources() {
    let registry = registry();
    let names: Vec<&str> = registry.resources().map(|r| r.name).collect();

    assert_eq!(registry.len(), 3);
    assert_eq!(names, vec!["hello", "button", "led"]);
}

#[test]
fn test_methods_per_resource() {
    let registry = registry();
    let led = registry.resources().find(|r| r.name == "led").unwrap();
    let methods: Vec<Method> = led.methods().collect();

    assert_eq!(methods, vec![Method::Get, Method::Post, Method::Put]);
}

#[test]
fn test_lookup_found() {
    let registry = registry();

    assert!(matches!(registry.lookup("hello", Method::Get), Lookup::Found(_)));
    assert!(matches!(registry.lookup("/button", Method::Get), Lookup::Found(_)));
    assert!(matches!(registry.lookup("led", Method::Post), Lookup::Found(_)));
    assert!(matches!(registry.lookup("led", Method::Put), Lookup::Found(_)));
}

#[test]
fn test_lookup_not_found() {
    let registry = registry();

    assert!(matches!(registry.lookup("leds", Method::Get), Lookup::NotFound));
    assert!(matches!(registry.lookup("LED", Method::Get), Lookup::NotFound));
    assert!(matches!(registry.lookup("", Method::Get), Lookup::NotFound));
    assert!(matches!(
        registry.lookup(".well-known/core", Method::Get),
        Lookup::NotFound
    ));
}

#[test]
fn test_lookup_method_not_allowed() {
    let registry = registry();

    assert!(matches!(
        registry.lookup("hello", Method::Post),
        Lookup::MethodNotAllowed
    ));
    assert!(matches!(
        registry.lookup("button", Method::Put),
        Lookup::MethodNotAllowed
    ));
    assert!(matches!(
        registry.lookup("led", Method::Delete),
        Lookup::MethodNotAllowed
    ));
    assert!(matches!(
        registry.lookup("led", Method::Other),
        Lookup::MethodNotAllowed
    ));
}
