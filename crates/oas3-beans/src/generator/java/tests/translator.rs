use crate::generator::{
  java::{model::JavaPackage, translator::JavaTranslator},
  metrics::GenerationWarning,
  schema::{extractor::SchemaExtractor, resolver::ReferenceResolver},
};

fn translate(yaml: &str) -> (JavaPackage, Vec<GenerationWarning>) {
  let mut extraction = SchemaExtractor::extract(yaml).expect("extraction should succeed");
  ReferenceResolver::resolve(&mut extraction.model, &mut extraction.errors);
  assert!(extraction.errors.is_empty(), "unexpected errors: {}", extraction.errors);
  JavaTranslator::new(&extraction.model).translate("generated")
}

#[test]
fn test_minimal_bean() {
  let (package, warnings) = translate("components:\n  schemas:\n    MyBeanName:\n      type: object\n");
  assert!(warnings.is_empty());
  assert_eq!(package.name, "generated");
  assert_eq!(package.classes.len(), 1);
  let class = &package.classes["MyBeanName"];
  assert!(class.data_members.is_empty());
  assert!(class.required_members.is_empty());
  assert!(package.enums.is_empty());
}

#[test]
fn test_primitive_type_mapping() {
  let (package, _) = translate(
    r"
components:
  schemas:
    AllTypes:
      type: object
      description: every primitive
      properties:
        aString:
          type: string
        anInt:
          type: integer
        aNumber:
          type: number
        aBool:
          type: boolean
        anObject:
          type: object
        aMystery:
          type: file
        anything:
          anyOf:
            - type: string
        grid:
          type: array
          items:
            type: array
            items:
              type: array
              items:
                type: boolean
",
  );
  let class = &package.classes["AllTypes"];
  assert_eq!(class.description, ["every primitive"]);
  let types = class
    .data_members
    .iter()
    .map(|member| (member.name.as_str(), member.member_type.as_str()))
    .collect::<Vec<_>>();
  assert_eq!(
    types,
    [
      ("aBool", "boolean"),
      ("aMystery", "file"),
      ("aNumber", "double"),
      ("aString", "String"),
      ("anInt", "int"),
      ("anObject", "AllTypesAnObject"),
      ("anything", "Object"),
      ("grid", "boolean[][][]"),
    ]
  );
  assert!(package.classes.contains_key("AllTypesAnObject"));
}

#[test]
fn test_required_members_in_name_order() {
  let (package, _) = translate(
    r"
components:
  schemas:
    MyBeanName:
      type: object
      required: [myStringVar, myIntVar]
      properties:
        myStringVar:
          type: string
        myIntVar:
          type: integer
        optional:
          type: string
",
  );
  let class = &package.classes["MyBeanName"];
  let required = class
    .required()
    .map(|member| format!("{} {}", member.member_type, member.name))
    .collect::<Vec<_>>();
  assert_eq!(required, ["int myIntVar", "String myStringVar"]);
  assert!(class.required_members[0].is_first);
  assert!(!class.required_members[1].is_first);
}

#[test]
fn test_snake_and_kebab_names_are_renamed() {
  let (package, _) = translate(
    r"
components:
  schemas:
    Bean:
      type: object
      properties:
        my_random_property:
          type: string
        my-kebab-property:
          type: string
        plainName:
          type: string
",
  );
  let class = &package.classes["Bean"];
  assert!(class.has_serialized_name_member);

  let members = class
    .data_members
    .iter()
    .map(|member| {
      (
        member.name.as_str(),
        member.pascal_case_name.as_str(),
        member.serialized_name_override.as_str(),
      )
    })
    .collect::<Vec<_>>();
  assert_eq!(
    members,
    [
      ("myKebabProperty", "MyKebabProperty", "my-kebab-property"),
      ("myRandomProperty", "MyRandomProperty", "my_random_property"),
      ("plainName", "PlainName", ""),
    ]
  );
  for member in &class.data_members {
    assert!(!member.name.contains('_'));
    assert!(member.name.chars().next().is_some_and(char::is_lowercase));
  }
}

#[test]
fn test_enum_property_becomes_enum_type() {
  let (package, _) = translate(
    r"
components:
  schemas:
    MyBeanName:
      type: object
      properties:
        myEnum:
          type: string
          description: an enum with 2 values to test against.
          enum: [string1, string2]
        optionalEnum:
          type: string
          enum: [randValue1, nil]
",
  );
  let class = &package.classes["MyBeanName"];
  let required = class.required().map(|member| member.name.as_str()).collect::<Vec<_>>();
  assert_eq!(required, ["myEnum"]);
  assert_eq!(class.data_members[0].member_type, "MyBeanNameMyEnum");
  assert_eq!(class.data_members[1].member_type, "MyBeanNameOptionalEnum");

  let my_enum = &package.enums["MyBeanNameMyEnum"];
  assert_eq!(my_enum.description, ["an enum with 2 values to test against."]);
  let constants = my_enum
    .enum_values
    .iter()
    .map(|value| value.const_format_name.as_str())
    .collect::<Vec<_>>();
  assert_eq!(constants, ["STRING_1", "STRING_2"]);

  let optional = &package.enums["MyBeanNameOptionalEnum"];
  assert_eq!(optional.enum_values.len(), 1);
  assert_eq!(optional.enum_values[0].const_format_name, "RAND_VALUE_1");
}

#[test]
fn test_constants() {
  let (package, _) = translate(
    r#"
components:
  schemas:
    MyBeanName:
      type: object
      properties:
        myConstVar:
          type: string
          description: a test constant
          enum: [constVal]
        maxSize:
          type: integer
          enum: [42]
        quoted:
          type: string
          enum: ['say "hi"']
"#,
  );
  let class = &package.classes["MyBeanName"];
  assert!(class.data_members.is_empty());
  let constants = class
    .constant_data_members
    .iter()
    .map(|member| (member.name.as_str(), member.member_type.as_str(), member.constant_val.as_str()))
    .collect::<Vec<_>>();
  assert_eq!(
    constants,
    [
      ("MAX_SIZE", "int", "42"),
      ("MY_CONST_VAR", "String", "\"constVal\""),
      ("QUOTED", "String", r#""say \"hi\"""#),
    ]
  );
  assert_eq!(class.constant_data_members[1].description, ["a test constant"]);
  assert!(class.constant_data_members.iter().all(|member| !member.constant_val.is_empty()));
}

#[test]
fn test_referenced_types() {
  let (package, _) = translate(
    r"
components:
  schemas:
    MyBeanName:
      type: object
      properties:
        myReferencingProperty:
          $ref: '#/components/schemas/MyReferencedObject'
        referencedString:
          $ref: '#/components/schemas/name'
        many:
          type: array
          items:
            $ref: '#/components/schemas/MyReferencedObject'
    MyReferencedObject:
      type: object
    name:
      type: string
",
  );
  assert_eq!(package.classes.len(), 2);
  let class = &package.classes["MyBeanName"];
  let types = class
    .data_members
    .iter()
    .map(|member| (member.name.as_str(), member.member_type.as_str()))
    .collect::<Vec<_>>();
  assert_eq!(
    types,
    [
      ("many", "MyReferencedObject[]"),
      ("myReferencingProperty", "MyReferencedObject"),
      ("referencedString", "String"),
    ]
  );
}

#[test]
fn test_duplicate_type_names_warn() {
  let (package, warnings) = translate(
    r"
components:
  schemas:
    Bean:
      type: object
      properties:
        part:
          type: object
    BeanPart:
      type: object
",
  );
  assert_eq!(package.classes.len(), 2);
  assert_eq!(warnings.len(), 1);
  assert!(matches!(&warnings[0], GenerationWarning::DuplicateTypeName { name, .. } if name == "BeanPart"));
}

#[test]
fn test_single_value_enum_array_stays_a_typed_member() {
  let (package, _) = translate(
    r"
components:
  schemas:
    Bean:
      type: object
      properties:
        tags:
          type: array
          items:
            type: string
            enum: [onlyValue]
",
  );
  let class = &package.classes["Bean"];
  assert!(class.constant_data_members.is_empty());
  assert_eq!(class.data_members.len(), 1);
  assert_eq!(class.data_members[0].name, "tags");
  assert_eq!(class.data_members[0].member_type, "String[]");
  assert!(class.data_members[0].constant_val.is_empty());
  assert!(package.enums.is_empty());
}
