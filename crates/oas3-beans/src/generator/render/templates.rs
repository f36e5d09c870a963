//! Mustache templates for Java sources and the flat views they render.

use std::sync::OnceLock;

use mustache::Template;
use serde::Serialize;

use crate::generator::{
  errors::GeneratorError,
  java::model::{DataMember, JavaClass, JavaEnum, escape_java_string},
};

const CLASS_TEMPLATE: &str = include_str!("../../../templates/JavaClassTemplate.mustache");
const ENUM_TEMPLATE: &str = include_str!("../../../templates/JavaEnumTemplate.mustache");

static TEMPLATES: OnceLock<JavaTemplates> = OnceLock::new();

/// The compiled class and enum templates, shared for the lifetime of the process.
pub struct JavaTemplates {
  class: Template,
  enumeration: Template,
}

impl JavaTemplates {
  pub fn get() -> Result<&'static Self, GeneratorError> {
    if let Some(templates) = TEMPLATES.get() {
      return Ok(templates);
    }
    let templates = Self::compile()?;
    Ok(TEMPLATES.get_or_init(|| templates))
  }

  fn compile() -> Result<Self, GeneratorError> {
    Ok(Self {
      class: compile("class", CLASS_TEMPLATE)?,
      enumeration: compile("enum", ENUM_TEMPLATE)?,
    })
  }

  pub fn render_class(&self, class: &JavaClass, package_name: &str) -> Result<String, GeneratorError> {
    render(&self.class, &class.name, &ClassView::new(class, package_name))
  }

  pub fn render_enum(&self, java_enum: &JavaEnum, package_name: &str) -> Result<String, GeneratorError> {
    render(&self.enumeration, &java_enum.name, &EnumView::new(java_enum, package_name))
  }
}

fn compile(name: &'static str, source: &str) -> Result<Template, GeneratorError> {
  mustache::compile_str(source).map_err(|source| GeneratorError::TemplateCompile { name, source })
}

fn render<T: Serialize>(template: &Template, name: &str, view: &T) -> Result<String, GeneratorError> {
  let mut buffer = Vec::new();
  template
    .render(&mut buffer, view)
    .map_err(|source| GeneratorError::TemplateRender {
      name: name.to_string(),
      source,
    })?;
  String::from_utf8(buffer).map_err(|_| GeneratorError::TemplateOutput { name: name.to_string() })
}

#[derive(Debug, Serialize)]
struct LineView<'a> {
  line: &'a str,
}

fn lines(description: &[String]) -> Vec<LineView<'_>> {
  description.iter().map(|line| LineView { line }).collect()
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ClassView<'a> {
  package_name: &'a str,
  name: &'a str,
  description: Vec<LineView<'a>>,
  has_serialized_name_member: bool,
  has_constants: bool,
  has_data_members: bool,
  constant_data_members: Vec<MemberView<'a>>,
  data_members: Vec<MemberView<'a>>,
  required_members: Vec<RequiredView<'a>>,
}

impl<'a> ClassView<'a> {
  fn new(class: &'a JavaClass, package_name: &'a str) -> Self {
    let required_members = class
      .required_members
      .iter()
      .zip(class.required())
      .map(|(required, member)| RequiredView {
        is_first: required.is_first,
        name: &member.name,
        member_type: &member.member_type,
      })
      .collect();

    Self {
      package_name,
      name: &class.name,
      description: lines(&class.description),
      has_serialized_name_member: class.has_serialized_name_member,
      has_constants: !class.constant_data_members.is_empty(),
      has_data_members: !class.data_members.is_empty(),
      constant_data_members: class.constant_data_members.iter().map(MemberView::new).collect(),
      data_members: class.data_members.iter().map(MemberView::new).collect(),
      required_members,
    }
  }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct MemberView<'a> {
  name: &'a str,
  pascal_case_name: &'a str,
  member_type: &'a str,
  description: Vec<LineView<'a>>,
  constant_val: &'a str,
  has_serialized_name_override: bool,
  serialized_name_override: String,
}

impl<'a> MemberView<'a> {
  fn new(member: &'a DataMember) -> Self {
    Self {
      name: &member.name,
      pascal_case_name: &member.pascal_case_name,
      member_type: &member.member_type,
      description: lines(&member.description),
      constant_val: &member.constant_val,
      has_serialized_name_override: member.has_serialized_name_override(),
      serialized_name_override: escape_java_string(&member.serialized_name_override),
    }
  }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RequiredView<'a> {
  is_first: bool,
  name: &'a str,
  member_type: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct EnumView<'a> {
  package_name: &'a str,
  name: &'a str,
  description: Vec<LineView<'a>>,
  enum_values: Vec<EnumValueView<'a>>,
}

impl<'a> EnumView<'a> {
  fn new(java_enum: &'a JavaEnum, package_name: &'a str) -> Self {
    Self {
      package_name,
      name: &java_enum.name,
      description: lines(&java_enum.description),
      enum_values: java_enum
        .enum_values
        .iter()
        .map(|value| EnumValueView {
          const_format_name: &value.const_format_name,
          string_format: escape_java_string(&value.string_format),
        })
        .collect(),
    }
  }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct EnumValueView<'a> {
  const_format_name: &'a str,
  string_format: String,
}
