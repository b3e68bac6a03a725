//! Unit tests for `mscript_xml`.
