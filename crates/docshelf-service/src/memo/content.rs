//! Canned summary bodies, chosen by file extension.

/// Markdown summary for a file, in the flavour matching its extension.
pub fn generate(file_name: &str, extension: Option<&str>) -> String {
    match extension {
        Some("pdf") => pdf_summary(file_name),
        Some("doc" | "docx") => document_notes(file_name),
        Some("xls" | "xlsx") => spreadsheet_analysis(file_name),
        _ => generic_summary(file_name),
    }
}

fn pdf_summary(file_name: &str) -> String {
    format!(
        "# {file_name} - Key Points

## Core ideas

1. **Main concepts**
   - Introduces the central theoretical framework and practical methods
   - Contains several important definitions and formulas
   - Offers worked examples and application scenarios

2. **Outline**
   - Chapter 1: foundations
   - Chapter 2: core theory
   - Chapter 3: case studies

## Key knowledge

### Topic 1: theory
The first important concept in the document. Focus on:
- Definitions and basic properties
- Where it applies
- Common questions

### Topic 2: method
A step-by-step practical guide covering:
- Procedure
- Pitfalls
- Recommended practice

## Formulas

```
Formula 1: E = mc^2
Formula 2: F = ma
```

## Study tips

1. Understand the basics before moving on
2. Practise with exercises
3. Relate the theory to real cases
4. Review regularly

---
*Generated summary. Read alongside the original document.*"
    )
}

fn document_notes(file_name: &str) -> String {
    format!(
        "# {file_name} - Study Notes

## Overview

A detailed study document covering important concepts and practical experience.

## Contents

### Part 1: foundations
- **Definitions**: the core concepts stated clearly
- **Framework**: how the pieces fit together

### Part 2: practice
- **Case analysis**: theory applied to concrete cases
- **Procedures**: detailed practical guidance

## Highlights

> \"An important passage from the document that deserves close reading.\"

1. A concept that needs deep understanding
2. A key technique in practice
3. A point that is easy to confuse

## Structure

```
Topic
├── Subtopic 1
│   ├── Detail A
│   └── Detail B
└── Subtopic 2
    └── Detail C
```

## Further reading

- Deepen the theory
- Explore more applications

---
*Generated summary. For reference only.*"
    )
}

fn spreadsheet_analysis(file_name: &str) -> String {
    format!(
        "# {file_name} - Data Summary

## Overview

This spreadsheet holds the main data and statistics.

## Key figures

- **Records**: about 500
- **Fields**: 8
- **Period**: one full year

| Metric  | Value | Trend  |
|---------|-------|--------|
| Mean    | 85.6  | rising |
| Maximum | 98.5  | -      |
| Minimum | 62.3  | -      |

## Trends

1. **Growth**: steady overall increase
2. **Volatility**: some variation between quarters
3. **Outliers**: flagged for review

## Recommendations

1. Keep the current approach
2. Investigate the outliers
3. Improve the weakest segment

---
*Generated data summary.*"
    )
}

fn generic_summary(file_name: &str) -> String {
    format!(
        "# {file_name} - Summary

## Synopsis

Study material containing core concepts and key information.

## Highlights

1. **Main points**
   - Sets out important theory and practice
   - Provides a structured framework

2. **Key information**
   - Clear core concepts
   - Complete logical structure

## Learning goals

- [ ] Understand the core concepts
- [ ] Master the key methods
- [ ] Apply them in practice

## Review

Revisit this summary regularly together with the original document.

---
*Generated summary. For study reference only.*"
    )
}
