use crate::{Color, FieldProps, Modifier};

pub type ViewId = u64;

#[derive(Clone, Debug)]
pub enum ViewKind {
    Box,
    Row,
    Column,
    Text {
        text: String,
        color: Color,
        /// du; converted by the host pipeline
        font_size: f32,
    },
    TextField {
        field: FieldProps,
        color: Color,
        /// device px, already resolved
        font_size: f32,
    },
}

#[derive(Clone, Debug)]
pub struct View {
    pub id: ViewId,
    pub kind: ViewKind,
    pub modifier: Modifier,
    pub children: Vec<View>,
    pub semantics: Option<crate::semantics::Semantics>,
}

impl View {
    pub fn new(id: ViewId, kind: ViewKind) -> Self {
        View {
            id,
            kind,
            modifier: Modifier::default(),
            children: vec![],
            semantics: None,
        }
    }
    pub fn modifier(mut self, m: Modifier) -> Self {
        self.modifier = m;
        self
    }
    pub fn with_children(mut self, kids: Vec<View>) -> Self {
        self.children = kids;
        self
    }
    pub fn semantics(mut self, s: crate::semantics::Semantics) -> Self {
        self.semantics = Some(s);
        self
    }
}
