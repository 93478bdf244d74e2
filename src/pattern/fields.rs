bitflags::bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Fields: u8 {
        const SCHEME = 1 << 0;
        const HOST = 1 << 1;
        const PORT = 1 << 2;
        const CONTEXT_PATH = 1 << 3;
        const PREFIX = 1 << 4;
        // prefix is optional for completeness; it defaults to the whole context
        const COMPLETE = Self::SCHEME.bits()
            | Self::HOST.bits()
            | Self::PORT.bits()
            | Self::CONTEXT_PATH.bits();
    }
}

impl Fields {
    pub(crate) fn from_presence(
        scheme: bool,
        host: bool,
        port: bool,
        context_path: bool,
        prefix: bool,
    ) -> Self {
        let mut fields = Fields::empty();
        fields.set(Fields::SCHEME, scheme);
        fields.set(Fields::HOST, host);
        fields.set(Fields::PORT, port);
        fields.set(Fields::CONTEXT_PATH, context_path);
        fields.set(Fields::PREFIX, prefix);
        fields
    }

    pub fn is_complete(self) -> bool {
        self.contains(Fields::COMPLETE)
    }
}
