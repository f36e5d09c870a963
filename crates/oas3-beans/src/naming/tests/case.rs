use crate::naming::case::{Case, to_camel_case, to_pascal_case, to_screaming_snake_case, to_snake_case};

#[test]
fn test_screaming_snake_case() {
  assert_eq!(to_screaming_snake_case("myConstantName"), "MY_CONSTANT_NAME");
  assert_eq!(to_screaming_snake_case("i"), "I");
  assert_eq!(to_screaming_snake_case("1myConstantName"), "1MY_CONSTANT_NAME");
  assert_eq!(to_screaming_snake_case("_myConstantName"), "_MY_CONSTANT_NAME");
  assert_eq!(to_screaming_snake_case("MY_CONSTANT_NAME"), "MY_CONSTANT_NAME");
}

#[test]
fn test_screaming_snake_case_splits_digits_and_acronyms() {
  assert_eq!(to_screaming_snake_case("randValue1"), "RAND_VALUE_1");
  assert_eq!(to_screaming_snake_case("HTTPServer"), "HTTP_SERVER");
  assert_eq!(to_screaming_snake_case("value2Go"), "VALUE_2_GO");
  assert_eq!(to_screaming_snake_case("string1"), "STRING_1");
  assert_eq!(to_screaming_snake_case("in-progress"), "IN_PROGRESS");
}

#[test]
fn test_snake_case() {
  assert_eq!(to_snake_case("myConstantName"), "my_constant_name");
  assert_eq!(to_snake_case("PascalCase"), "pascal_case");
  assert_eq!(to_snake_case("already_snake"), "already_snake");
}

#[test]
fn test_camel_case() {
  assert_eq!(to_camel_case("PascalCaseString"), "pascalCaseString");
  assert_eq!(to_camel_case("snake_case_string"), "snakeCaseString");
  assert_eq!(to_camel_case("SNAKE_CASE_STRING"), "snakeCaseString");
  assert_eq!(to_camel_case("alreadyCamel"), "alreadyCamel");
  assert_eq!(to_camel_case("name"), "name");
  assert_eq!(to_camel_case(""), "");
}

#[test]
fn test_pascal_case() {
  assert_eq!(to_pascal_case("myUnCamelledName"), "MyUnCamelledName");
  assert_eq!(to_pascal_case("snake_case_string"), "SnakeCaseString");
  assert_eq!(to_pascal_case("SNAKE_CASE"), "SnakeCase");
  assert_eq!(to_pascal_case("my-kebab-name"), "MyKebabName");
  assert_eq!(to_pascal_case("PascalCase"), "PascalCase");
  assert_eq!(to_pascal_case(""), "");
}

#[test]
fn test_camel_and_pascal_agree_past_first_letter() {
  for input in ["my_string_var", "MY_STRING_VAR", "myStringVar", "MyStringVar"] {
    let camel = to_camel_case(input);
    let pascal = to_pascal_case(input);
    assert_eq!(camel[1..], pascal[1..], "mismatch for {input}");
    assert_eq!(camel[..1], pascal[..1].to_lowercase(), "mismatch for {input}");
  }
}

#[test]
fn test_conversions_compose() {
  let inputs = [
    "my_string_var",
    "MY_STRING_VAR",
    "myStringVar",
    "MyStringVar",
    "my-kebab-name",
    "randValue1",
    "value_2_go",
    "HTTPServer2",
    "name",
  ];
  for input in inputs {
    assert_eq!(to_camel_case(&to_pascal_case(input)), to_camel_case(input), "camel of pascal for {input}");
    assert_eq!(to_pascal_case(&to_camel_case(input)), to_pascal_case(input), "pascal of camel for {input}");
    assert_eq!(
      to_snake_case(&to_screaming_snake_case(input)),
      to_snake_case(input),
      "snake of screaming for {input}"
    );
  }
}

#[test]
fn test_case_detection() {
  assert_eq!(Case::detect("camelCase"), Case::Camel);
  assert_eq!(Case::detect("PascalCase"), Case::Pascal);
  assert_eq!(Case::detect("snake_case"), Case::SnakeVariant);
  assert_eq!(Case::detect("SNAKE_CASE"), Case::SnakeVariant);
  assert_eq!(Case::detect("lower"), Case::None);
  assert_eq!(Case::detect("kebab-case"), Case::None);
  assert_eq!(Case::Camel.to_string(), "camelCase");
}
