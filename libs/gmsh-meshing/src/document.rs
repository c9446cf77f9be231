//! # Document Meshing Extension
//!
//! Registers size fields on a [`Geometry`] document and emits the
//! meshing-level directives (`Background Field`, `Coherence;`).
//!
//! The extension is a trait implemented for `Geometry`, so the meshing
//! layer composes with the model crate without the document knowing about
//! fields.
//!
//! ## Field numbering
//!
//! Two numbering policies exist. Under [`FieldNumbering::OnRegister`] (the
//! default) the document reassigns the field's id from its own counter at
//! registration, discarding the id the allocator handed out at
//! construction. Under [`FieldNumbering::Construction`] the field keeps
//! its construction id. A field's own statement block renders from its
//! current id either way; attribute values that embed *other* fields' ids
//! (`FieldsList`, MathEval tokens) were rendered at construction and are
//! not rewritten, so compose over fields only after registering them, or
//! use `Construction` numbering throughout.
//!
//! ## Example
//!
//! ```rust
//! use glam::DVec3;
//! use gmsh_meshing::{FieldAllocator, Meshing};
//! use gmsh_model::Geometry;
//!
//! let mut geo = Geometry::new();
//! let mut fields = FieldAllocator::new();
//! let p = geo.add_point(DVec3::ZERO, None);
//!
//! let distance = geo
//!     .add_distance_field(&mut fields, &[p.into()], Some(5))
//!     .unwrap();
//! geo.set_background_field(&distance);
//! geo.achieve_coherence();
//! assert!(geo.get_code().ends_with("Coherence;"));
//! ```

use crate::error::MeshingError;
use crate::fields::{Field, FieldAllocator, MathEvalArgs};
use crate::sets::Operand;
use gmsh_model::Geometry;

/// How a field is numbered when registered on a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldNumbering {
    /// Reassign the id from the document's own counter.
    #[default]
    OnRegister,
    /// Keep the id assigned at construction.
    Construction,
}

/// Meshing operations on a geometry document.
pub trait Meshing {
    /// Register a field under the given numbering policy and append its
    /// statement block to the script. Returns the field for chaining.
    fn add_field_numbered(&mut self, field: Field, numbering: FieldNumbering) -> Field;

    /// Register a field under the default policy.
    fn add_field(&mut self, field: Field) -> Field {
        self.add_field_numbered(field, FieldNumbering::default())
    }

    /// Select the registered field that controls mesh sizes.
    fn set_background_field(&mut self, field: &Field);

    /// Append the `Coherence;` directive, removing duplicate entities.
    fn achieve_coherence(&mut self);

    /// Construct and register a distance field in one step.
    fn add_distance_field(
        &mut self,
        allocator: &mut FieldAllocator,
        objects: &[Operand],
        n_nodes_by_edge: Option<u32>,
    ) -> Result<Field, MeshingError>;

    /// Construct and register an expression field in one step.
    fn add_math_eval_field(
        &mut self,
        allocator: &mut FieldAllocator,
        expression: &str,
        args: MathEvalArgs<'_>,
    ) -> Result<Field, MeshingError>;

    /// Construct and register a min combinator in one step.
    fn add_min_field(&mut self, allocator: &mut FieldAllocator, fields: &[&Field]) -> Field;

    /// Construct and register a max combinator in one step.
    fn add_max_field(&mut self, allocator: &mut FieldAllocator, fields: &[&Field]) -> Field;
}

impl Meshing for Geometry {
    fn add_field_numbered(&mut self, mut field: Field, numbering: FieldNumbering) -> Field {
        if numbering == FieldNumbering::OnRegister {
            let id = self.fresh_field_id();
            field.renumber(id);
        }
        self.append_statement(field.code());
        field
    }

    fn set_background_field(&mut self, field: &Field) {
        self.append_statement(format!("Background Field = {};", field.id()));
    }

    fn achieve_coherence(&mut self) {
        self.append_statement("Coherence;");
    }

    fn add_distance_field(
        &mut self,
        allocator: &mut FieldAllocator,
        objects: &[Operand],
        n_nodes_by_edge: Option<u32>,
    ) -> Result<Field, MeshingError> {
        let field = Field::distance(allocator, objects, n_nodes_by_edge)?;
        Ok(self.add_field(field))
    }

    fn add_math_eval_field(
        &mut self,
        allocator: &mut FieldAllocator,
        expression: &str,
        args: MathEvalArgs<'_>,
    ) -> Result<Field, MeshingError> {
        let field = Field::math_eval(allocator, expression, args)?;
        Ok(self.add_field(field))
    }

    fn add_min_field(&mut self, allocator: &mut FieldAllocator, fields: &[&Field]) -> Field {
        let field = Field::min(allocator, fields);
        self.add_field(field)
    }

    fn add_max_field(&mut self, allocator: &mut FieldAllocator, fields: &[&Field]) -> Field {
        let field = Field::max(allocator, fields);
        self.add_field(field)
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::FieldKind;
    use glam::DVec3;

    #[test]
    fn test_add_field_renumbers_from_document_counter() {
        let mut geo = Geometry::new();
        let mut fields = FieldAllocator::new();
        fields.fresh();
        fields.fresh();
        // Construction id is 2; the document counter starts at 0.
        let field = Field::min(&mut fields, &[]);
        assert_eq!(field.id(), 2);
        let field = geo.add_field(field);
        assert_eq!(field.id(), 0);
        assert!(geo.get_code().starts_with("Field[0] = Min;"));
    }

    #[test]
    fn test_construction_numbering_keeps_id() {
        let mut geo = Geometry::new();
        let mut fields = FieldAllocator::new();
        fields.fresh();
        let field = Field::min(&mut fields, &[]);
        let field = geo.add_field_numbered(field, FieldNumbering::Construction);
        assert_eq!(field.id(), 1);
        assert!(geo.get_code().starts_with("Field[1] = Min;"));
    }

    #[test]
    fn test_set_background_field_appends_one_statement() {
        let mut geo = Geometry::new();
        let mut fields = FieldAllocator::new();
        let field = geo.add_min_field(&mut fields, &[]);
        geo.set_background_field(&field);
        assert_eq!(
            geo.statements().last().unwrap(),
            &format!("Background Field = {};", field.id())
        );
    }

    #[test]
    fn test_achieve_coherence() {
        let mut geo = Geometry::new();
        geo.achieve_coherence();
        assert_eq!(geo.statements(), &["Coherence;".to_string()]);
    }

    #[test]
    fn test_convenience_constructors_register() {
        let mut geo = Geometry::new();
        let mut fields = FieldAllocator::new();
        let p = geo.add_point(DVec3::ZERO, None);

        let distance = geo
            .add_distance_field(&mut fields, &[p.into()], Some(4))
            .unwrap();
        assert_eq!(distance.kind(), FieldKind::Distance);
        assert_eq!(distance.id(), 0);

        let eval = geo
            .add_math_eval_field(
                &mut fields,
                "{} * 2",
                MathEvalArgs::Positional(&[&distance]),
            )
            .unwrap();
        assert_eq!(eval.id(), 1);
        assert!(geo.get_code().contains("Field[1].F = \"F0 * 2\";"));

        let max = geo.add_max_field(&mut fields, &[&distance, &eval]);
        assert!(geo.get_code().contains("Field[2].FieldsList = {0, 1};"));
        assert_eq!(max.id(), 2);
    }
}
