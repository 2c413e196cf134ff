pub mod opcode_record;
pub mod opcode_source;
pub mod opcode_table;
pub mod opcode_index;

#[cfg(test)]
mod tests;
