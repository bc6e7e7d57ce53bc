use super::{Ty, TypeBuilder, TypeKind, TypeView};
use alloc::string::String;
use core::fmt::Write;

/// Formats types into strings for diagnostics.
///
/// Bit vectors print as `bits[N]`, tuples as `(A, B)`, arrays as the
/// element followed by `[size]` (so nested arrays read outer size last,
/// `bits[8][3][4]`), and functions as `(A, B) -> R`.
pub struct TypeFormatter<B: TypeBuilder> {
    output: String,
    builder: B,
}

impl<B: TypeBuilder> TypeFormatter<B> {
    pub fn new(builder: B) -> Self {
        Self {
            output: String::new(),
            builder,
        }
    }

    pub fn format(ty: &impl TypeView<B>, builder: B) -> String {
        let mut formatter = Self::new(builder);
        formatter.visit(ty);
        formatter.output
    }

    fn visit(&mut self, ty: &impl TypeView<B>) {
        let builder = self.builder;
        match ty.view(builder) {
            TypeKind::Bits(bits) => {
                let _ = write!(self.output, "bits[{}]", bits.bit_count());
            }
            TypeKind::Tuple(members) => {
                self.visit_list(builder.types_data(members));
            }
            TypeKind::Array { size, elem } => {
                self.visit(elem);
                let _ = write!(self.output, "[{}]", size);
            }
            TypeKind::Function { params, ret } => {
                self.visit_list(builder.types_data(params));
                let _ = write!(self.output, " -> ");
                self.visit(ret);
            }
        }
    }

    fn visit_list(&mut self, types: &[B::TypeView]) {
        let _ = write!(self.output, "(");
        for (i, ty) in types.iter().enumerate() {
            if i > 0 {
                let _ = write!(self.output, ", ");
            }
            self.visit(ty);
        }
        let _ = write!(self.output, ")");
    }
}

/// Extension trait to add display methods to type handles.
pub trait TyDisplay<B: TypeBuilder> {
    fn display(&self, builder: B) -> String;
}

impl<B: TypeBuilder> TyDisplay<B> for Ty<B> {
    fn display(&self, builder: B) -> String {
        TypeFormatter::format(self, builder)
    }
}
