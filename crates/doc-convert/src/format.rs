//! Document formats and the conversion selected by a file name's extension.

use std::fmt;

/// A supported document format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentFormat {
    Pdf,
    Docx,
}

impl DocumentFormat {
    /// Extension without the dot.
    pub fn extension(self) -> &'static str {
        match self {
            DocumentFormat::Pdf => "pdf",
            DocumentFormat::Docx => "docx",
        }
    }

    /// Literal file-name suffix matched case-sensitively.
    pub fn suffix(self) -> &'static str {
        match self {
            DocumentFormat::Pdf => ".pdf",
            DocumentFormat::Docx => ".docx",
        }
    }

    /// Label used in user-facing text.
    pub fn label(self) -> &'static str {
        match self {
            DocumentFormat::Pdf => "PDF",
            DocumentFormat::Docx => "DOCX",
        }
    }
}

/// Direction of a conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Conversion {
    PdfToDocx,
    DocxToPdf,
}

impl Conversion {
    pub const ALL: [Conversion; 2] = [Conversion::PdfToDocx, Conversion::DocxToPdf];

    /// Selects the conversion for a declared file name.
    ///
    /// Only a name ending exactly in `.pdf` or `.docx` matches, `.pdf` itself included.
    /// `report.PDF`, `notes.txt`, `noextension` and `report.pdf ` all yield `None`.
    pub fn from_file_name(file_name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|conversion| file_name.ends_with(conversion.source().suffix()))
    }

    pub fn source(self) -> DocumentFormat {
        match self {
            Conversion::PdfToDocx => DocumentFormat::Pdf,
            Conversion::DocxToPdf => DocumentFormat::Docx,
        }
    }

    pub fn target(self) -> DocumentFormat {
        match self {
            Conversion::PdfToDocx => DocumentFormat::Docx,
            Conversion::DocxToPdf => DocumentFormat::Pdf,
        }
    }

    /// Derives the output name by replacing the trailing source suffix with the target suffix.
    /// Only the last occurrence is replaced: `a.pdf.pdf` becomes `a.pdf.docx`.
    pub fn output_file_name(self, file_name: &str) -> String {
        let stem = file_name
            .strip_suffix(self.source().suffix())
            .unwrap_or(file_name);
        format!("{}{}", stem, self.target().suffix())
    }
}

impl fmt::Display for Conversion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}->{}",
            self.source().extension(),
            self.target().extension()
        )
    }
}
